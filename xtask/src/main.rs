// TC Logistics - Build Task Runner
// Run with `cargo xtask <command>`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use xshell::{Shell, cmd};

const BINARY: &str = "tc-logistics";
const SOURCE_LOCALE: &str = "en";

fn main() -> Result<()> {
    let sh = Shell::new()?;
    let args: Vec<_> = std::env::args().skip(1).collect();

    match args.first().map(|s| s.as_str()) {
        Some("build") => {
            let release = args.iter().any(|arg| arg == "--release");
            build(&sh, release)
        },
        Some("test") => test(&sh),
        Some("format") => {
            let check = args.iter().any(|arg| arg == "--check");
            format(&sh, check)
        },
        Some("clippy") => clippy(&sh),
        Some("catalogs") => catalogs(),
        Some("run") => run(&sh, &args[1..]),
        Some("clean") => clean(&sh),
        Some("ci") => ci(&sh),
        Some("dist") => dist(&sh),
        _ => {
            print_help();
            Ok(())
        },
    }
}

fn print_help() {
    println!("TC Logistics - Build Commands:");
    println!();
    println!("Usage: cargo xtask <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  build [--release]   Build the web server");
    println!("  test                Run all tests");
    println!("  format [--check]    Format code (check mode doesn't modify)");
    println!("  clippy              Run clippy checks");
    println!("  catalogs            Report message ids missing from translated catalogs");
    println!("  run [ARGS...]       Build and run the server");
    println!("  clean               Clean build artifacts");
    println!("  ci                  Run all CI checks (format + clippy + catalogs + test)");
    println!("  dist                Create distribution package (tar.gz)");
    println!();
    println!("Examples:");
    println!("  cargo xtask build --release");
    println!("  cargo xtask run -- --port 8080");
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    println!("🔨 Building TC Logistics{}...", if release { " (release)" } else { "" });

    let _dir = sh.push_dir(project_root());
    if release {
        cmd!(sh, "cargo build --release -p {BINARY}")
            .run()
            .context("Failed to build in release mode")?;
    } else {
        cmd!(sh, "cargo build -p {BINARY}").run().context("Failed to build")?;
    }

    println!("✅ Build complete");
    Ok(())
}

fn test(sh: &Shell) -> Result<()> {
    println!("🧪 Running tests...");

    let _dir = sh.push_dir(project_root());
    cmd!(sh, "cargo test --workspace").run().context("Tests failed")?;

    println!("✅ All tests passed!");
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    let _dir = sh.push_dir(project_root());

    if check {
        cmd!(sh, "cargo fmt --all -- --check")
            .run()
            .context("Rust code is not formatted")?;
        println!("✅ Rust code is properly formatted");
    } else {
        cmd!(sh, "cargo fmt --all").run().context("Failed to format Rust code")?;
        println!("✅ Rust code formatted");
    }

    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    let _dir = sh.push_dir(project_root());

    cmd!(sh, "cargo clippy --all-targets -- --deny warnings --allow clippy::uninlined-format-args")
        .run()
        .context("Clippy checks failed")?;

    Ok(())
}

/// Compare every translated catalog under web/locales against the source
/// catalog. Fails when a locale lacks ids or carries stale ones.
fn catalogs() -> Result<()> {
    let root = project_root().join("web/locales");
    let source = read_catalog(&root, SOURCE_LOCALE)?;
    println!("📚 Source catalog '{}': {} message(s)", SOURCE_LOCALE, source.len());

    let mut locales: Vec<String> = std::fs::read_dir(&root)
        .with_context(|| format!("Failed to read {}", root.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name != SOURCE_LOCALE)
        .collect();
    locales.sort();

    let mut incomplete = 0;
    for locale in &locales {
        let catalog = read_catalog(&root, locale)?;
        let missing: Vec<_> = source.keys().filter(|id| !catalog.contains_key(*id)).collect();
        let stale: Vec<_> = catalog.keys().filter(|id| !source.contains_key(*id)).collect();

        if missing.is_empty() && stale.is_empty() {
            println!("✅ {}: complete", locale);
            continue;
        }

        incomplete += 1;
        println!("⚠️  {}: {} missing, {} stale", locale, missing.len(), stale.len());
        for id in missing {
            println!("     missing: {}", id);
        }
        for id in stale {
            println!("     stale:   {}", id);
        }
    }

    if incomplete > 0 {
        bail!("{} catalog(s) out of sync with '{}'", incomplete, SOURCE_LOCALE);
    }
    Ok(())
}

fn read_catalog(root: &Path, locale: &str) -> Result<BTreeMap<String, String>> {
    let path = root.join(locale).join("messages.json");
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid catalog {}", path.display()))
}

fn run(sh: &Shell, args: &[String]) -> Result<()> {
    println!("🚀 Running TC Logistics...");

    let _dir = sh.push_dir(project_root().join("web"));
    let args = args.iter().skip_while(|arg| *arg == "--");
    cmd!(sh, "cargo run -- {args...}").run().context("Failed to run application")?;

    Ok(())
}

fn clean(sh: &Shell) -> Result<()> {
    println!("🧹 Cleaning build artifacts...");

    let project = project_root();
    let _dir = sh.push_dir(&project);
    cmd!(sh, "cargo clean").run()?;

    let build_dir = project.join("build");
    if build_dir.exists() {
        sh.remove_path(&build_dir)?;
    }

    println!("✅ Clean complete!");
    Ok(())
}

fn ci(sh: &Shell) -> Result<()> {
    println!("🔄 Running CI pipeline...");

    println!("📝 [1/4] Checking code format...");
    format(sh, true)?;

    println!("🔍 [2/4] Running clippy checks...");
    clippy(sh)?;

    println!("📚 [3/4] Checking catalogs...");
    catalogs()?;

    println!("🧪 [4/4] Running tests...");
    test(sh)?;

    println!("🎉 CI pipeline completed successfully!");
    Ok(())
}

/// Release binary plus sample configuration, packed as a tarball.
fn dist(sh: &Shell) -> Result<()> {
    build(sh, true)?;

    let project = project_root();
    let dist_dir = project.join("build/dist");
    sh.create_dir(dist_dir.join("bin"))?;
    sh.create_dir(dist_dir.join("conf"))?;
    sh.create_dir(dist_dir.join("logs"))?;

    sh.copy_file(project.join("target/release").join(BINARY), dist_dir.join("bin"))?;
    sh.copy_file(project.join("web/conf/config.toml"), dist_dir.join("conf"))?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let package_name = format!("{}-{}.tar.gz", BINARY, timestamp);
    let package_path = dist_dir.join(&package_name);

    let _dir = sh.push_dir(&dist_dir);
    cmd!(sh, "tar czf {package_name} bin conf logs")
        .run()
        .context("Failed to create tarball")?;

    println!("✅ Distribution package created: {}", package_path.display());
    Ok(())
}

fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(manifest_dir).to_path_buf()
}
