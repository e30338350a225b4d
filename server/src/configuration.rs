mod profile;

pub use profile::ApplicationProfile;

use anyhow::Context;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use sd_api::configuration::Config;

fn load_app_profile() -> Result<ApplicationProfile, anyhow::Error> {
    ApplicationProfile::load(Some(ApplicationProfile::Dev))
}

/// Loads [`Config`] by merging, in priority order: `base.yaml`, then
/// `<profile>.yaml`, then `APP_`-prefixed environment variables.
///
/// We don't lean on `figment`'s own profile support because we want
/// values for different profiles to live in separate files rather than
/// co-located in one, to keep it hard to accidentally commit a `dev`
/// secret into `prod.yaml`.
pub fn load_configuration() -> Result<Config, anyhow::Error> {
    let application_profile =
    load_app_profile().context("Failed to load the desired application profile")?;

    let configuration_dir = {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        std::path::Path::new(manifest_dir).join("configuration")
    };
    let base_filepath = configuration_dir.join("base.yaml");
    let profile_filepath = configuration_dir.join(format!("{}.yaml", application_profile.as_str()));

    let figment = Figment::new()
    .merge(Yaml::file(base_filepath))
    .merge(Yaml::file(profile_filepath))
    .merge(Env::prefixed("APP_").split("__"));

    figment
    .extract()
    .context("Failed to load hierarchical configuration")
}
