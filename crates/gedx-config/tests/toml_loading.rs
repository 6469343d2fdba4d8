//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use gedx_config::{ConfigError, GedxConfig, PROJECT_CONFIG_PATH};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[xml]
indent = 4
emit_object_type = false

[validation]
strict_coordinates = true
require_place_name = false
",
        )?;

        let config: GedxConfig = Figment::from(Serialized::defaults(GedxConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.xml.indent, 4);
        assert!(!config.xml.emit_object_type);
        assert!(config.validation.strict_coordinates);
        assert!(!config.validation.require_place_name);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[validation]\nstrict_coordinates = true\n")?;

        let config: GedxConfig = Figment::from(Serialized::defaults(GedxConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.validation.strict_coordinates);
        assert!(config.validation.require_place_name);
        assert_eq!(config.xml, GedxConfig::default().xml);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".gedx")?;
        jail.create_file(PROJECT_CONFIG_PATH, "[xml]\nindent = 0\n")?;

        let config = GedxConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.xml.indent, 0);
        assert!(config.xml.emit_object_type);
        Ok(())
    });
}

#[test]
fn project_file_beats_user_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        let user_path =
            GedxConfig::global_config_path().ok_or_else(|| "no config dir".to_string())?;
        let user_dir = user_path.parent().ok_or_else(|| "no parent".to_string())?;
        std::fs::create_dir_all(user_dir).map_err(|e| e.to_string())?;
        std::fs::write(&user_path, "[xml]\nindent = 6\nemit_object_type = false\n")
            .map_err(|e| e.to_string())?;
        jail.create_dir(".gedx")?;
        jail.create_file(PROJECT_CONFIG_PATH, "[xml]\nindent = 1\n")?;

        let config = GedxConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.xml.indent, 1);
        assert!(!config.xml.emit_object_type);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".gedx")?;
        jail.create_file(PROJECT_CONFIG_PATH, "[xml]\nindent = 8\n")?;
        jail.set_env("GEDX_XML__INDENT", "3");

        let config = GedxConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.xml.indent, 3);
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".gedx")?;
        jail.create_file(PROJECT_CONFIG_PATH, "[xml]\nindent = \"wide\"\n")?;

        assert!(matches!(GedxConfig::load(), Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn out_of_range_indent_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".gedx")?;
        jail.create_file(PROJECT_CONFIG_PATH, "[xml]\nindent = 99\n")?;

        assert!(matches!(
            GedxConfig::load(),
            Err(ConfigError::InvalidValue { .. })
        ));
        Ok(())
    });
}

/// Point the user config directory into the jail.
fn isolate_user_config(jail: &mut Jail) {
    let home = jail.directory().display().to_string();
    jail.set_env("HOME", &home);
    jail.set_env("XDG_CONFIG_HOME", format!("{home}/.config"));
}
