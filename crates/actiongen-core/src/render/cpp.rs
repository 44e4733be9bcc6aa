//! C++ header output: `databaseAction.h` (enum + abstract base), one header
//! per action, and `actions.h` holding the registry.

use super::{unrenderable, Renderer};
use crate::error::Result;
use crate::model::{EntryModel, GeneratedArtifact, RegistryModel};
use crate::naming::guard_name;
use crate::types::Target;

pub const INTERFACE_STEM: &str = "databaseAction";
pub const AGGREGATE_STEM: &str = "actions";

const INTERFACE_GUARD: &str = "CLI_DATABASE_ACTION_H";
const ACTION_GUARD_PREFIX: &str = "CLI_ACTIONS";
const REGISTRY_TYPE: &str = "possibleActions_t";

/// Global typedefs reachable through `<string>`, `<memory>` and `<vector>`
/// on common standard libraries. A class of the same name does not compile.
const STD_TYPEDEFS: &[&str] = &[
    "size_t", "ssize_t", "ptrdiff_t", "wchar_t", "wint_t", "wctype_t", "char8_t", "char16_t",
    "char32_t", "nullptr_t", "max_align_t", "mbstate_t", "int8_t", "int16_t", "int32_t",
    "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t", "intmax_t", "uintmax_t",
    "intptr_t", "uintptr_t", "time_t", "clock_t", "clockid_t", "timer_t", "locale_t", "off_t",
    "pid_t", "uid_t", "gid_t", "mode_t", "dev_t", "ino_t", "key_t", "id_t", "pthread_t",
    "fpos_t", "div_t", "ldiv_t", "lldiv_t", "sig_atomic_t", "suseconds_t", "useconds_t",
    "blksize_t", "blkcnt_t", "nlink_t", "caddr_t", "daddr_t", "fsid_t", "loff_t", "quad_t",
    "u_char", "u_int", "u_long", "u_short",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CppRenderer;

impl Renderer for CppRenderer {
    fn target(&self) -> Target {
        Target::Cpp
    }

    fn reserved_stems(&self) -> &'static [&'static str] {
        &[INTERFACE_STEM, AGGREGATE_STEM]
    }

    fn check_entry(&self, entry: &EntryModel) -> Result<()> {
        let ty = entry.type_name.as_str();
        if ty == REGISTRY_TYPE || ty == "databaseAction_t" {
            return Err(unrenderable(
                entry,
                Target::Cpp,
                format!("type name '{ty}' is used by a generated header"),
            ));
        }
        if STD_TYPEDEFS.contains(&ty) {
            return Err(unrenderable(
                entry,
                Target::Cpp,
                format!("type name '{ty}' is a standard library typedef"),
            ));
        }
        // Enumerators like `_FOO` or `A__B` are reserved names in C++.
        if entry.identifier.starts_with('_') || entry.identifier.contains("__") {
            return Err(unrenderable(
                entry,
                Target::Cpp,
                format!("discriminant '{}' is a reserved C++ name", entry.discriminant),
            ));
        }
        Ok(())
    }

    fn interface(&self, model: &RegistryModel) -> GeneratedArtifact {
        let variants = model
            .discriminants()
            .map(|d| format!("    {d}"))
            .collect::<Vec<_>>()
            .join(",\n");

        let content = format!(
            r#"#ifndef {INTERFACE_GUARD}
#define {INTERFACE_GUARD}

#include <string>

enum class task_e
{{
{variants}
}};

class databaseAction_t
{{
public:
    virtual auto userOption() const -> std::string = 0;
    virtual auto taskType() const -> task_e = 0;
    virtual ~databaseAction_t() = default;
}};

#endif // {INTERFACE_GUARD}
"#
        );
        GeneratedArtifact::new(INTERFACE_STEM, Target::Cpp.extension(), content)
    }

    fn concrete(&self, entry: &EntryModel) -> GeneratedArtifact {
        let guard = guard_name(ACTION_GUARD_PREFIX, &entry.identifier);
        let ty = &entry.type_name;
        let disc = &entry.discriminant;
        let label = string_literal(&entry.label);

        let content = format!(
            r#"#ifndef {guard}
#define {guard}

#include "{INTERFACE_STEM}.h"

class {ty} : public databaseAction_t
{{
public:
    auto userOption() const -> std::string override
    {{
        return {label};
    }}

    auto taskType() const -> task_e override
    {{
        return task_e::{disc};
    }}

    ~{ty}() override = default;
}};

#endif // {guard}
"#
        );
        GeneratedArtifact::new(&entry.stem, Target::Cpp.extension(), content)
    }

    fn aggregate(&self, model: &RegistryModel) -> GeneratedArtifact {
        let guard = guard_name(ACTION_GUARD_PREFIX, AGGREGATE_STEM);
        let includes = model
            .entries
            .iter()
            .map(|e| format!("#include \"{}.h\"", e.stem))
            .collect::<Vec<_>>()
            .join("\n");
        let registrations = model
            .entries
            .iter()
            .map(|e| format!("        ret.emplace_back(std::make_unique<{}>());", e.type_name))
            .collect::<Vec<_>>()
            .join("\n");
        let count = model.entries.len();

        let content = format!(
            r#"#ifndef {guard}
#define {guard}

#include <memory>
#include <vector>

#include "{INTERFACE_STEM}.h"
{includes}

using {REGISTRY_TYPE} = std::vector<std::unique_ptr<databaseAction_t>>;

// Built on first call; function-local statics are initialized exactly once.
inline auto possibleActions() -> const {REGISTRY_TYPE} &
{{
    static const {REGISTRY_TYPE} actions = []
    {{
        {REGISTRY_TYPE} ret;
        ret.reserve({count});
{registrations}
        return ret;
    }}();
    return actions;
}}

#endif // {guard}
"#
        );
        GeneratedArtifact::new(AGGREGATE_STEM, Target::Cpp.extension(), content)
    }
}

/// Quote `s` as a C++ narrow string literal.
fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '?' => out.push_str("\\?"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
