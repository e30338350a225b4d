use cargo_px_env::generated_pkg_manifest_path;
use pavex_cli_client::Client;
use sd_api::api_blueprint;
use std::env::args;
use std::error::Error;

/// Generate the `server_sdk` crate using pavex's CLI.
///
/// pavex wires every route, constructor, and error handler in
/// [`api_blueprint`] into a "server SDK" that the final `sd_server`
/// binary uses to launch the application. Passing `--check` only
/// verifies that the already-generated crate is up to date.
fn main() -> Result<(), Box<dyn Error>> {
    let generated_dir = generated_pkg_manifest_path()?.parent().unwrap().into();
    let mut cmd = Client::new().generate(api_blueprint(), generated_dir);
    if args().any(|arg| arg == "--check") {
        cmd = cmd.check();
    }
    if let Err(e) = cmd.execute() {
        eprintln!("{e}");
        std::process::exit(1);
    }
    Ok(())
}
