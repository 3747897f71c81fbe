//! Built-in protocols plus the user's own.

use crate::Protocol;

/// The protocols shipped with the app. Read-only.
pub fn builtin() -> Vec<Protocol> {
    vec![
        Protocol::builtin("repeaters", "Repeaters", 7, 3, 6, 180, 3),
        Protocol::builtin("max-hangs", "Max Hangs", 10, 0, 1, 180, 5),
        Protocol::builtin("intermediate", "Intermediate Repeaters", 10, 5, 5, 120, 3),
        Protocol::builtin("endurance", "Endurance", 15, 15, 8, 180, 2),
    ]
}

/// Where a protocol in the catalog comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Builtin,
    Custom,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    builtin: Vec<Protocol>,
    custom: Vec<Protocol>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    pub fn new(custom: Vec<Protocol>) -> Self {
        Self {
            builtin: builtin(),
            custom,
        }
    }

    pub fn builtin(&self) -> &[Protocol] {
        &self.builtin
    }

    pub fn custom(&self) -> &[Protocol] {
        &self.custom
    }

    /// Built-ins first, then custom protocols in creation order.
    pub fn all(&self) -> impl Iterator<Item = (Origin, &Protocol)> {
        self.builtin
            .iter()
            .map(|p| (Origin::Builtin, p))
            .chain(self.custom.iter().map(|p| (Origin::Custom, p)))
    }

    pub fn len(&self) -> usize {
        self.builtin.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look a protocol up by id. Built-ins shadow custom protocols.
    pub fn find(&self, id: &str) -> Option<&Protocol> {
        self.builtin
            .iter()
            .chain(self.custom.iter())
            .find(|p| p.id() == id)
    }

    pub fn is_custom(&self, id: &str) -> bool {
        self.custom.iter().any(|p| p.id() == id)
    }

    /// Insert a custom protocol, replacing one with the same id.
    pub fn upsert_custom(&mut self, protocol: Protocol) {
        match self.custom.iter_mut().find(|p| p.id() == protocol.id()) {
            Some(existing) => *existing = protocol,
            None => self.custom.push(protocol),
        }
    }

    pub fn remove_custom(&mut self, id: &str) -> Option<Protocol> {
        let idx = self.custom.iter().position(|p| p.id() == id)?;
        Some(self.custom.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_totals() {
        let totals: Vec<_> = builtin()
            .iter()
            .map(|p| (p.id().to_string(), p.total_duration()))
            .collect();
        assert_eq!(
            totals,
            vec![
                ("repeaters".to_string(), 531),
                ("max-hangs".to_string(), 770),
                ("intermediate".to_string(), 450),
                ("endurance".to_string(), 630),
            ]
        );
    }

    #[test]
    fn builtins_satisfy_protocol_invariants() {
        for p in builtin() {
            let rebuilt = Protocol::new(
                p.id(),
                p.name(),
                p.hang_time(),
                p.rest_time(),
                p.reps_per_set(),
                p.rest_between_sets(),
                p.number_of_sets(),
            );
            assert_eq!(rebuilt.as_ref(), Ok(&p));
        }
    }

    #[test]
    fn find_prefers_builtin() {
        let shadow = Protocol::new("repeaters", "Fake", 1, 0, 1, 0, 1).unwrap();
        let mine = Protocol::new("mine", "Mine", 5, 5, 5, 60, 2).unwrap();
        let catalog = Catalog::new(vec![shadow, mine.clone()]);

        assert_eq!(catalog.find("repeaters").unwrap().name(), "Repeaters");
        assert_eq!(catalog.find("mine"), Some(&mine));
        assert!(catalog.find("nope").is_none());
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn upsert_and_remove_custom() {
        let mut catalog = Catalog::default();
        let v1 = Protocol::new("c1", "Mine", 5, 5, 5, 60, 2).unwrap();
        let v2 = Protocol::new("c1", "Mine v2", 6, 4, 5, 60, 2).unwrap();

        catalog.upsert_custom(v1);
        catalog.upsert_custom(v2.clone());
        assert_eq!(catalog.custom(), &[v2]);
        assert!(catalog.is_custom("c1"));
        assert!(!catalog.is_custom("repeaters"));

        assert!(catalog.remove_custom("c1").is_some());
        assert!(catalog.remove_custom("c1").is_none());
        assert_eq!(catalog.all().count(), 4);
    }
}
