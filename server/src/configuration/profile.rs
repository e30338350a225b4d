use anyhow::Context;
use std::env::VarError;

/// The application profile: which set of configuration values
/// (`configuration/<profile>.yaml`) to layer over `base.yaml`.
pub enum ApplicationProfile {
    /// Local development and the integration test suite. Never
    /// committed with real secrets — `dev.yaml` only carries
    /// non-sensitive defaults, real secrets come from the environment.
    Dev,
    /// Production. `prod.yaml` is committed but only ever holds
    /// non-sensitive values.
    Prod,
}

impl ApplicationProfile {
    pub fn load(default_profile: Option<ApplicationProfile>) -> Result<ApplicationProfile, anyhow::Error> {
        static PROFILE_ENV_VAR: &str = "APP_PROFILE";
        match std::env::var(PROFILE_ENV_VAR) {
            Ok(raw_value) => raw_value.parse().with_context(|| {
                    format!("Failed to parse the `{PROFILE_ENV_VAR}` environment variable")
            }),
            Err(VarError::NotPresent) if default_profile.is_some() => Ok(default_profile.unwrap()),
            Err(e) => Err(anyhow::anyhow!(e).context(format!(
                        "Failed to read the `{PROFILE_ENV_VAR}` environment variable"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationProfile::Dev => "dev",
            ApplicationProfile::Prod => "prod",
        }
    }
}

impl std::str::FromStr for ApplicationProfile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(ApplicationProfile::Dev),
            "prod" | "production" => Ok(ApplicationProfile::Prod),
            s => Err(anyhow::anyhow!(
                    "`{}` is not a valid application profile.\nValid options are: `dev`, `prod`.",
                    s
            )),
        }
    }
}
