//! Read-only analysis over declared framework relationships.
//!
//! A `prerequisite` record on framework A listing B means A should come
//! before B. Complementary links are taken as declared, not symmetrized.

use super::FrameworkCatalog;
use crate::taxonomy::RelationshipType;
use std::collections::{BTreeMap, BTreeSet};

impl FrameworkCatalog {
    /// Ids declared by `id` under `relationship_type`, in declaration order.
    pub fn related(&self, id: &str, relationship_type: RelationshipType) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for rel in self.relationships(id).unwrap_or(&[]) {
            if rel.relationship_type != relationship_type {
                continue;
            }
            for related in &rel.related_framework_ids {
                if !out.contains(&related.as_str()) {
                    out.push(related);
                }
            }
        }
        out
    }

    /// Frameworks that should be applied before `id`.
    pub fn prerequisites_of(&self, id: &str) -> Vec<&str> {
        self.relationships_db()
            .iter()
            .filter(|(_, rels)| {
                rels.iter().any(|r| {
                    r.relationship_type == RelationshipType::Prerequisite
                        && r.related_framework_ids.iter().any(|x| x == id)
                })
            })
            .map(|(fw, _)| fw.as_str())
            .collect()
    }

    /// Declared alternatives plus the antipattern's suggested replacements.
    pub fn alternatives_for(&self, id: &str) -> Vec<&str> {
        let mut out = self.related(id, RelationshipType::Alternative);
        if let Some(anti) = self.antipattern(id) {
            for alt in &anti.alternative_frameworks {
                if !out.contains(&alt.as_str()) {
                    out.push(alt);
                }
            }
        }
        out
    }

    /// `[prerequisites..., framework]` for every framework with prerequisites.
    pub fn prerequisite_chains(&self) -> Vec<Vec<String>> {
        let mut prereqs: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for (fw, rels) in self.relationships_db() {
            for rel in rels {
                if rel.relationship_type != RelationshipType::Prerequisite {
                    continue;
                }
                for target in &rel.related_framework_ids {
                    prereqs.entry(target.as_str()).or_default().insert(fw.as_str());
                }
            }
        }
        prereqs
            .into_iter()
            .map(|(target, before)| {
                let mut chain: Vec<String> = before.into_iter().map(str::to_string).collect();
                chain.push(target.to_string());
                chain
            })
            .collect()
    }

    fn complement_map(&self) -> BTreeMap<&str, BTreeSet<&str>> {
        let mut map: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for (fw, rels) in self.relationships_db() {
            for rel in rels {
                if rel.relationship_type == RelationshipType::Complementary {
                    map.entry(fw.as_str())
                        .or_default()
                        .extend(rel.related_framework_ids.iter().map(String::as_str));
                }
            }
        }
        map
    }

    /// Groups of frameworks that work well together.
    ///
    /// Seeds are visited in id order. A cluster holds the seed, its
    /// complements and their complements (one level of transitivity); only
    /// clusters larger than two are kept, and clustered ids never seed again.
    pub fn complementary_clusters(&self) -> Vec<BTreeSet<String>> {
        let map = self.complement_map();
        let mut visited: BTreeSet<&str> = BTreeSet::new();
        let mut clusters = Vec::new();

        for (fw, complements) in &map {
            if visited.contains(fw) {
                continue;
            }
            let mut cluster: BTreeSet<&str> = BTreeSet::new();
            cluster.insert(*fw);
            cluster.extend(complements.iter().copied());
            for comp in complements {
                if let Some(next) = map.get(comp) {
                    cluster.extend(next.iter().copied());
                }
            }
            if cluster.len() > 2 {
                visited.extend(cluster.iter().copied());
                clusters.push(cluster.into_iter().map(str::to_string).collect());
            }
        }
        clusters
    }

    /// Top `n` frameworks by complementary degree (declaring or declared).
    pub fn most_connected(&self, n: usize) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for (fw, complements) in self.complement_map() {
            *counts.entry(fw).or_default() += complements.len();
            for comp in complements {
                *counts.entry(comp).or_default() += 1;
            }
        }
        let mut ranked: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(fw, c)| (fw.to_string(), c))
            .collect();
        // BTreeMap order already sorts ties by id; the sort is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::FrameworkRelationship;
    use super::*;

    fn rel(fw: &str, ty: RelationshipType, related: &[&str]) -> FrameworkRelationship {
        FrameworkRelationship {
            framework_id: fw.to_string(),
            relationship_type: ty,
            related_framework_ids: related.iter().map(|s| s.to_string()).collect(),
            relationship_strength: 80,
            notes: String::new(),
        }
    }

    fn small_catalog() -> FrameworkCatalog {
        use RelationshipType::*;
        let mut rels = BTreeMap::new();
        rels.insert("a".to_string(), vec![rel("a", Complementary, &["b", "c"])]);
        rels.insert("b".to_string(), vec![rel("b", Complementary, &["d"])]);
        rels.insert("x".to_string(), vec![rel("x", Complementary, &["y"])]);
        rels.insert(
            "p".to_string(),
            vec![rel("p", Prerequisite, &["q"]), rel("p", Alternative, &["r"])],
        );
        rels.insert("s".to_string(), vec![rel("s", Prerequisite, &["q"])]);
        FrameworkCatalog::from_parts(BTreeMap::new(), rels, BTreeMap::new(), BTreeMap::new())
    }

    #[test]
    fn test_prerequisites_point_forward() {
        let catalog = small_catalog();
        assert_eq!(catalog.prerequisites_of("q"), vec!["p", "s"]);
        assert!(catalog.prerequisites_of("p").is_empty());
        assert_eq!(
            catalog.prerequisite_chains(),
            vec![vec!["p".to_string(), "s".to_string(), "q".to_string()]]
        );
    }

    #[test]
    fn test_clusters_use_one_level_of_transitivity() {
        let clusters = small_catalog().complementary_clusters();
        assert_eq!(clusters.len(), 1);
        let expected: BTreeSet<String> =
            ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(clusters[0], expected);
    }

    #[test]
    fn test_most_connected_counts_both_directions() {
        let top = small_catalog().most_connected(2);
        assert_eq!(top[0], ("a".to_string(), 2));
        // b declares one and is declared once
        assert_eq!(top[1], ("b".to_string(), 2));
    }

    #[test]
    fn test_alternatives_merge_relationships_and_antipatterns() {
        let catalog = crate::catalog::catalog();
        let alts = catalog.alternatives_for("bcg_matrix");
        assert_eq!(alts[0], "ge_mckinsey_matrix");
        assert!(alts.contains(&"lean_canvas"));
        assert!(alts.contains(&"product_market_fit"));

        assert_eq!(small_catalog().alternatives_for("p"), vec!["r"]);
    }

    #[test]
    fn test_real_catalog_graph() {
        let catalog = crate::catalog::catalog();
        assert!(
            catalog
                .prerequisites_of("competitive_positioning")
                .contains(&"porters_five_forces")
        );
        assert_eq!(
            catalog.related("mvp_framework", RelationshipType::Progressive),
            vec!["product_market_fit"]
        );
        assert!(!catalog.complementary_clusters().is_empty());
        assert!(catalog.most_connected(5).len() <= 5);
    }
}
