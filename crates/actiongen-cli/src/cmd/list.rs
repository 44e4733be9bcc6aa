use crate::output::{print_json, print_table};
use actiongen_core::config::Config;
use actiongen_core::model::RegistryModel;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ListedAction<'a> {
    index: usize,
    identifier: &'a str,
    derived_name: &'a str,
    type_name: &'a str,
    discriminant: &'a str,
    description: &'a str,
}

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load actiongen.yaml")?;
    let actions = config.actions.expand()?;
    let model = RegistryModel::from_actions(&actions);

    let listed: Vec<ListedAction> = model
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| ListedAction {
            index: i + 1,
            identifier: &e.identifier,
            derived_name: &e.stem,
            type_name: &e.type_name,
            discriminant: &e.discriminant,
            description: &e.label,
        })
        .collect();

    if json {
        return print_json(&listed);
    }

    let rows: Vec<Vec<String>> = listed
        .iter()
        .map(|a| {
            vec![
                a.index.to_string(),
                a.discriminant.to_string(),
                a.type_name.to_string(),
                a.description.to_string(),
            ]
        })
        .collect();
    print_table(&["#", "DISCRIMINANT", "TYPE", "DESCRIPTION"], &rows);
    Ok(())
}
