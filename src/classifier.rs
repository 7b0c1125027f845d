// Host OS classification from Prometheus job labels

use std::collections::HashMap;

use crate::models::HostKind;

/// Instance -> OS kind map, built once per run from the backend's series
/// listing. Instances it has never seen classify as Unknown.
#[derive(Debug, Clone, Default)]
pub struct HostClassifier {
    by_instance: HashMap<String, HostKind>,
}

impl HostClassifier {
    /// Classifier that knows nothing; every instance comes back Unknown.
    /// Used when the series metadata fetch fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the map from (instance, job) label pairs. A job label equal to
    /// `linux_job` marks the instance Linux, `windows_job` marks it Windows,
    /// any other job marks it Unknown. Pairs without an instance are ignored.
    pub fn from_labels<I, S>(pairs: I, linux_job: &str, windows_job: &str) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut by_instance = HashMap::new();
        for (instance, job) in pairs {
            let instance = instance.as_ref();
            if instance.is_empty() {
                continue;
            }
            let kind = if job.as_ref() == linux_job {
                HostKind::Linux
            } else if job.as_ref() == windows_job {
                HostKind::Windows
            } else {
                HostKind::Unknown
            };
            by_instance.insert(instance.to_string(), kind);
        }
        Self { by_instance }
    }

    pub fn classify(&self, instance: &str) -> HostKind {
        self.by_instance
            .get(instance)
            .copied()
            .unwrap_or(HostKind::Unknown)
    }

    pub fn is_empty(&self) -> bool {
        self.by_instance.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_instance.len()
    }
}
