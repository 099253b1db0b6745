//! Name-format checks for the attributes that identify a Kubernetes object. Anything beyond the
//! format of names is left to the API server.

use regex::Regex;
use serde::Serialize;

const DNS_SUBDOMAIN_REGEX: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";
const DNS_LABEL_REGEX: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$";
const DNS_SUBDOMAIN_MAX_LENGTH: usize = 253;
const DNS_LABEL_MAX_LENGTH: usize = 63;

lazy_static::lazy_static! {
    static ref DNS_SUBDOMAIN: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(DNS_SUBDOMAIN_REGEX).unwrap()
    };
    static ref DNS_LABEL: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(DNS_LABEL_REGEX).unwrap()
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    /// An RFC 1123 subdomain, as required for the names of most objects.
    DnsSubdomainName,
    /// An RFC 1123 label, as required for namespace names.
    DnsLabelName,
}

impl Validator {
    /// Checks `value`, returning a description of the problem if it is not valid.
    pub fn validate(&self, value: &str) -> Result<(), String> {
        let (max_length, regex) = match self {
            Validator::DnsSubdomainName => (DNS_SUBDOMAIN_MAX_LENGTH, &*DNS_SUBDOMAIN),
            Validator::DnsLabelName => (DNS_LABEL_MAX_LENGTH, &*DNS_LABEL),
        };
        if value.len() > max_length {
            return Err(format!(
                "'{}' is {} characters long, {} must be at most {} characters",
                value,
                value.len(),
                self.description(),
                max_length
            ));
        }
        if !regex.is_match(value) {
            return Err(format!(
                "'{}' is not valid, {} must consist of lower case alphanumeric characters{}, and \
                 must start and end with an alphanumeric character",
                value,
                self.description(),
                match self {
                    Validator::DnsSubdomainName => ", '-' or '.'",
                    Validator::DnsLabelName => " or '-'",
                }
            ));
        }
        Ok(())
    }

    pub fn description(&self) -> &'static str {
        match self {
            Validator::DnsSubdomainName => "a DNS subdomain name",
            Validator::DnsLabelName => "a DNS label name",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn subdomain_names() {
        for name in ["gateway-proxy", "a", "petstore.example.com", "0xdeadbeef"] {
            assert_eq!(Validator::DnsSubdomainName.validate(name), Ok(()), "{}", name);
        }
        for name in ["", "Gateway", "-proxy", "proxy-", "pet..store", "under_score"] {
            assert!(Validator::DnsSubdomainName.validate(name).is_err(), "{}", name);
        }
        assert!(Validator::DnsSubdomainName
            .validate(&"a".repeat(254))
            .is_err());
    }

    #[test]
    fn label_names() {
        assert_eq!(Validator::DnsLabelName.validate("gloo-system"), Ok(()));
        assert!(Validator::DnsLabelName.validate("gloo.system").is_err());
        assert!(Validator::DnsLabelName.validate(&"a".repeat(64)).is_err());
        assert_eq!(Validator::DnsLabelName.validate(&"a".repeat(63)), Ok(()));
    }
}
