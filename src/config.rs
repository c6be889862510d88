use std::env;

pub const DEFAULT_REGION: &str = "us-west-2";

/// AWS credential and region settings, read once at the program boundary.
///
/// The copy driver never touches the process environment itself; it receives
/// this struct from `main`.
#[derive(Clone, Debug)]
pub struct AwsSettings {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: String,
}

impl AwsSettings {
    /// Read the conventional AWS environment variables. The region falls
    /// back to `us-west-2` when unset.
    pub fn from_env() -> Self {
        Self {
            access_key_id: non_empty_var("AWS_ACCESS_KEY_ID"),
            secret_access_key: non_empty_var("AWS_SECRET_ACCESS_KEY"),
            region: non_empty_var("AWS_DEFAULT_REGION")
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
        }
    }

    /// Whether a full static key pair is available. Without one the SDK's
    /// default provider chain applies.
    pub fn has_static_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifies static credentials require both halves of the key pair.
    #[test]
    fn static_credentials_need_both_keys() {
        let both = AwsSettings {
            access_key_id: Some("AKIA123".to_string()),
            secret_access_key: Some("secret".to_string()),
            region: DEFAULT_REGION.to_string(),
        };
        assert!(both.has_static_credentials());

        let key_only = AwsSettings {
            access_key_id: Some("AKIA123".to_string()),
            secret_access_key: None,
            region: DEFAULT_REGION.to_string(),
        };
        assert!(!key_only.has_static_credentials());

        let neither = AwsSettings {
            access_key_id: None,
            secret_access_key: None,
            region: DEFAULT_REGION.to_string(),
        };
        assert!(!neither.has_static_credentials());
    }
}
