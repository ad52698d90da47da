use serde::{Deserialize, Serialize};

/// Fewest symptoms the classifier accepts.
pub const MIN_SYMPTOMS: usize = 2;

/// Fixed symptom vocabulary of the cattle disease classifier. The tokens
/// (including their irregular spellings) are the wire format the trained
/// models were fitted on, so they must not be normalised here.
pub const SYMPTOMS: &[&str] = &[
    "anorexia",
    "abdominal_pain",
    "anaemia",
    "abortions",
    "acetone",
    "aggression",
    "arthrogyposis",
    "ankylosis",
    "anxiety",
    "bellowing",
    "blood_loss",
    "blood_poisoning",
    "blisters",
    "colic",
    "Condemnation_of_livers",
    "coughing",
    "depression",
    "discomfort",
    "dyspnea",
    "dysentery",
    "diarrhoea",
    "dehydration",
    "drooling",
    "dull",
    "decreased_fertility",
    "diffculty_breath",
    "emaciation",
    "encephalitis",
    "fever",
    "facial_paralysis",
    "frothing_of_mouth",
    "frothing",
    "gaseous_stomach",
    "highly_diarrhoea",
    "high_pulse_rate",
    "high_temp",
    "high_proportion",
    "hyperaemia",
    "hydrocephalus",
    "isolation_from_herd",
    "infertility",
    "intermittent_fever",
    "jaundice",
    "ketosis",
    "loss_of_appetite",
    "lameness",
    "lack_of-coordination",
    "lethargy",
    "lacrimation",
    "milk_flakes",
    "milk_watery",
    "milk_clots",
    "mild_diarrhoea",
    "moaning",
    "mucosal_lesions",
    "milk_fever",
    "nausea",
    "nasel_discharges",
    "oedema",
    "pain",
    "painful_tongue",
    "pneumonia",
    "photo_sensitization",
    "quivering_lips",
    "reduction_milk_vields",
    "rapid_breathing",
    "rumenstasis",
    "reduced_rumination",
    "reduced_fertility",
    "reduced_fat",
    "reduces_feed_intake",
    "raised_breathing",
    "stomach_pain",
    "salivation",
    "stillbirths",
    "shallow_breathing",
    "swollen_pharyngeal",
    "swelling",
    "saliva",
    "swollen_tongue",
    "tachycardia",
    "torticollis",
    "udder_swelling",
    "udder_heat",
    "udder_hardeness",
    "udder_redness",
    "udder_pain",
    "unwillingness_to_move",
    "ulcers",
    "vomiting",
    "weight_loss",
    "weakness",
];

/// POST body of the disease-prediction endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionRequest {
    pub symptoms: Vec<String>,
}

/// Labels from the four classifiers, keyed by their fixed model names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelPredictions {
    #[serde(rename = "DecisionTree")]
    pub decision_tree: String,
    #[serde(rename = "RandomForest")]
    pub random_forest: String,
    #[serde(rename = "KNN")]
    pub knn: String,
    #[serde(rename = "NaiveBayes")]
    pub naive_bayes: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResponse {
    pub input_symptoms: Vec<String>,
    pub predictions: ModelPredictions,
}

/// Plurality vote over the four model outputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Consensus {
    pub disease: String,
    /// round(votes / 4 * 100)
    pub confidence: u8,
}

impl ModelPredictions {
    /// Labels in fixed model order; this order is also the tie-break order
    /// of the consensus vote.
    pub fn labels(&self) -> [(&'static str, &str); 4] {
        [
            ("Decision Tree", self.decision_tree.as_str()),
            ("Random Forest", self.random_forest.as_str()),
            ("K-Nearest Neighbors", self.knn.as_str()),
            ("Naive Bayes", self.naive_bayes.as_str()),
        ]
    }

    /// Tally the four labels; the highest count wins, ties broken by the
    /// first-encountered label in model order.
    pub fn consensus(&self) -> Consensus {
        let mut tally: Vec<(&str, u32)> = Vec::with_capacity(4);
        for (_, label) in self.labels() {
            match tally.iter_mut().find(|(l, _)| *l == label) {
                Some((_, count)) => *count += 1,
                None => tally.push((label, 1)),
            }
        }

        // Only a strictly greater count displaces the leader, so ties
        // keep the first-encountered label.
        let mut best: (&str, u32) = ("unknown", 0);
        for (label, count) in &tally {
            if *count > best.1 {
                best = (label, *count);
            }
        }
        let (disease, votes) = best;

        Consensus {
            disease: disease.to_string(),
            confidence: ((votes as f32 / 4.0) * 100.0).round() as u8,
        }
    }
}

impl PredictionResponse {
    /// Substitute shown when the endpoint answers with a non-2xx status.
    pub fn http_error_fallback(symptoms: Vec<String>) -> Self {
        Self {
            input_symptoms: symptoms,
            predictions: ModelPredictions {
                decision_tree: "gut_worms".into(),
                random_forest: "gut_worms".into(),
                knn: "mastitis".into(),
                naive_bayes: "gut_worms".into(),
            },
        }
    }

    /// Substitute shown when the request itself fails.
    pub fn network_error_fallback(symptoms: Vec<String>) -> Self {
        Self {
            input_symptoms: symptoms,
            predictions: ModelPredictions {
                decision_tree: "unable_to_determine".into(),
                random_forest: "unable_to_determine".into(),
                knn: "unable_to_determine".into(),
                naive_bayes: "unable_to_determine".into(),
            },
        }
    }
}

pub fn can_submit(selected: &[String]) -> bool {
    selected.len() >= MIN_SYMPTOMS
}

/// `gut_worms` -> `Gut Worms`, for display only.
pub fn display_name(token: &str) -> String {
    token
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preds(dt: &str, rf: &str, knn: &str, nb: &str) -> ModelPredictions {
        ModelPredictions {
            decision_tree: dt.into(),
            random_forest: rf.into(),
            knn: knn.into(),
            naive_bayes: nb.into(),
        }
    }

    #[test]
    fn three_of_four_gives_75_percent() {
        let consensus = preds("a", "a", "b", "a").consensus();
        assert_eq!(consensus.disease, "a");
        assert_eq!(consensus.confidence, 75);
    }

    #[test]
    fn tie_breaks_to_first_encountered_label() {
        let consensus = preds("a", "a", "b", "b").consensus();
        assert_eq!(consensus.disease, "a");
        assert_eq!(consensus.confidence, 50);

        let consensus = preds("b", "b", "a", "a").consensus();
        assert_eq!(consensus.disease, "b");

        let consensus = preds("a", "b", "a", "b").consensus();
        assert_eq!(consensus.disease, "a");

        let consensus = preds("d", "c", "b", "a").consensus();
        assert_eq!(consensus.disease, "d");
        assert_eq!(consensus.confidence, 25);
    }

    #[test]
    fn unanimous_is_100_percent() {
        let consensus = preds("x", "x", "x", "x").consensus();
        assert_eq!(consensus.disease, "x");
        assert_eq!(consensus.confidence, 100);
    }

    #[test]
    fn fallbacks_are_fixed_and_distinguishable() {
        let symptoms = vec!["fever".to_string(), "coughing".to_string()];
        let http = PredictionResponse::http_error_fallback(symptoms.clone());
        let network = PredictionResponse::network_error_fallback(symptoms.clone());

        assert_eq!(http.predictions.knn, "mastitis");
        assert_eq!(http.predictions.consensus().disease, "gut_worms");
        assert_eq!(network.predictions.consensus().disease, "unable_to_determine");
        assert_ne!(http.predictions, network.predictions);
        assert_eq!(http.input_symptoms, symptoms);
    }

    #[test]
    fn submission_gate_opens_at_two_symptoms() {
        let one = vec!["fever".to_string()];
        let two = vec!["fever".to_string(), "coughing".to_string()];
        assert!(!can_submit(&[]));
        assert!(!can_submit(&one));
        assert!(can_submit(&two));
    }

    #[test]
    fn response_parses_fixed_model_names() {
        let json = r#"{
            "input_symptoms": ["fever", "coughing"],
            "predictions": {
                "DecisionTree": "fmd",
                "RandomForest": "fmd",
                "KNN": "fmd",
                "NaiveBayes": "anthrax"
            }
        }"#;
        let resp: PredictionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.predictions.consensus().disease, "fmd");
        assert_eq!(resp.predictions.consensus().confidence, 75);
    }

    #[test]
    fn display_name_capitalizes_words() {
        assert_eq!(display_name("gut_worms"), "Gut Worms");
        assert_eq!(display_name("unable_to_determine"), "Unable To Determine");
        assert_eq!(display_name("fever"), "Fever");
    }

    #[test]
    fn vocabulary_holds_the_full_symptom_set() {
        assert_eq!(SYMPTOMS.len(), 92);
        assert!(SYMPTOMS.contains(&"udder_swelling"));
    }
}
