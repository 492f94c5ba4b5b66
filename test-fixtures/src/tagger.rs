use std::collections::HashMap;

use whyfind_core::errors::WhyfindResult;
use whyfind_core::traits::ITagger;

/// Word-list POS tagger emitting Penn Treebank style labels.
///
/// Covers the fixture corpora; anything unlisted defaults to `NN`, the
/// usual tagger fallback for out-of-vocabulary words.
pub struct RuleTagger {
    labels: HashMap<&'static str, &'static str>,
}

impl RuleTagger {
    pub fn new() -> Self {
        let mut labels = HashMap::new();
        for verb in [
            "did", "was", "start", "started", "begin", "began", "cause", "caused", "signed",
        ] {
            labels.insert(verb, "VBD");
        }
        for noun in ["war", "dispute", "border", "conflict", "treaty", "reason", "autumn"] {
            labels.insert(noun, "NN");
        }
        for adj in ["big", "cold", "second"] {
            labels.insert(adj, "JJ");
        }
        for adv in ["swiftly", "quickly", "later"] {
            labels.insert(adv, "RB");
        }
        // Closed classes that coarsen to the unknown category.
        labels.insert("why", "WRB");
        for det in ["the", "a", "an"] {
            labels.insert(det, "DT");
        }
        for prep in ["over", "in", "of"] {
            labels.insert(prep, "IN");
        }
        Self { labels }
    }
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl ITagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> WhyfindResult<Vec<(String, String)>> {
        Ok(tokens
            .iter()
            .map(|t| {
                let label = self.labels.get(t.as_str()).copied().unwrap_or("NN");
                (t.clone(), label.to_string())
            })
            .collect())
    }
}
