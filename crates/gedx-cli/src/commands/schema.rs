use anyhow::anyhow;
use gedx_schema::SchemaRegistry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SchemaCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SchemaName {
    name: &'static str,
}

/// Handle `gedx schema`.
pub fn handle(action: &SchemaCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    match action {
        SchemaCommands::List => {
            let names: Vec<SchemaName> = registry
                .list()
                .into_iter()
                .map(|name| SchemaName { name })
                .collect();
            output(&names, flags.format)
        }
        SchemaCommands::Show { name } => output(show(&registry, name)?, flags.format),
    }
}

fn show<'a>(registry: &'a SchemaRegistry, name: &str) -> anyhow::Result<&'a serde_json::Value> {
    registry.get(name).ok_or_else(|| {
        anyhow!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_returns_registered_schema() {
        let registry = SchemaRegistry::new();
        let schema = show(&registry, "change_info").unwrap();
        assert!(schema.get("properties").is_some());
    }

    #[test]
    fn show_unknown_lists_alternatives() {
        let registry = SchemaRegistry::new();
        let err = show(&registry, "person").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown schema 'person'"));
        assert!(message.contains("place_description"));
    }
}
