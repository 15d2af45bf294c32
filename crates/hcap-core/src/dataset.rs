use std::fmt;

/// The three datasets every source supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatasetKind {
    /// Feeder topology and hosting capacity.
    NetworkData,
    /// DER already connected to the network.
    InstalledDer,
    /// DER in the interconnection queue.
    PlannedDer,
}

impl DatasetKind {
    /// All kinds, in load order.
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::NetworkData,
        DatasetKind::InstalledDer,
        DatasetKind::PlannedDer,
    ];

    /// Table name used for the Bronze and Silver stages.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::NetworkData => "network_data",
            DatasetKind::InstalledDer => "installed_der",
            DatasetKind::PlannedDer => "planned_der",
        }
    }

    /// Key naming this dataset's path in a source configuration.
    pub fn config_key(&self) -> &'static str {
        match self {
            DatasetKind::NetworkData => "network",
            DatasetKind::InstalledDer => "installed",
            DatasetKind::PlannedDer => "planned",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_keys_line_up() {
        let names: Vec<_> = DatasetKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["network_data", "installed_der", "planned_der"]);
        let keys: Vec<_> = DatasetKind::ALL.iter().map(|k| k.config_key()).collect();
        assert_eq!(keys, ["network", "installed", "planned"]);
    }

    #[test]
    fn display_matches_table_name() {
        assert_eq!(DatasetKind::InstalledDer.to_string(), "installed_der");
    }
}
