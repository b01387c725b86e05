//! Plugin command discovery walkthrough.
//!
//! Builds a throwaway application tree containing a healthy plugin, a broken
//! one, and one that is declared but not installed, then runs discovery
//! against it. The skipped plugins surface as warn events through the
//! subscriber; the aggregated command list prints at the end.
//!
//! Run: cargo run --example discover

use std::path::Path;

use plugin_commands::{CommandDiscovery, DiscoveryConfig};

fn write_manifest(dir: &Path, json: &str) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join("package.json"), json)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("warn").init();

    let root = tempfile::tempdir()?;
    let app = root.path().join("app");
    let tool = app.join("node_modules/rnpm");

    write_manifest(
        &app,
        r#"{"dependencies":{"rnpm-plugin-link":"*","rnpm-plugin-broken":"*","rnpm-plugin-ghost":"*"}}"#,
    )?;
    write_manifest(&tool, r#"{"name":"rnpm"}"#)?;

    let modules = app.join("node_modules");
    write_manifest(
        &modules.join("rnpm-plugin-link"),
        r#"{"name":"rnpm-plugin-link"}"#,
    )?;
    std::fs::write(
        modules.join("rnpm-plugin-link/index.json"),
        r#"[{"name":"link","description":"Link native assets"},{"name":"unlink"}]"#,
    )?;
    write_manifest(
        &modules.join("rnpm-plugin-broken"),
        r#"{"name":"rnpm-plugin-broken"}"#,
    )?;
    std::fs::write(modules.join("rnpm-plugin-broken/index.json"), "][ not json")?;

    let config = DiscoveryConfig::for_tool("rnpm", &app, tool.join("src"));
    let commands = CommandDiscovery::new(config).commands()?;

    println!("discovered {} commands:", commands.len());
    for command in &commands {
        match &command.description {
            Some(description) => println!("  {} - {}", command.name, description),
            None => println!("  {}", command.name),
        }
    }

    Ok(())
}
