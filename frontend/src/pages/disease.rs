use gloo_console::error;
use gloo_net::http::Request;
use shared::prediction::{self, MIN_SYMPTOMS, SYMPTOMS};
use shared::{PredictionRequest, PredictionResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::AppConfig;

#[derive(Properties, PartialEq, Default)]
pub struct DiseaseProps {
    #[prop_or_default]
    pub config: AppConfig,
}

pub enum Msg {
    ToggleSymptom(String),
    SetSearch(String),
    Predict,
    Predicted(PredictionResponse),
}

/// Disease prediction form: multi-select over the fixed symptom
/// vocabulary, four-model classification, client-side consensus.
pub struct DiseasePage {
    selected: Vec<String>,
    search: String,
    prediction: Option<PredictionResponse>,
    loading: bool,
}

impl Component for DiseasePage {
    type Message = Msg;
    type Properties = DiseaseProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            selected: Vec::new(),
            search: String::new(),
            prediction: None,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleSymptom(symptom) => {
                match self.selected.iter().position(|s| *s == symptom) {
                    Some(index) => {
                        self.selected.remove(index);
                    }
                    None => self.selected.push(symptom),
                }
                true
            }
            Msg::SetSearch(term) => {
                self.search = term;
                true
            }
            Msg::Predict => {
                if !prediction::can_submit(&self.selected) || self.loading {
                    return false;
                }
                self.loading = true;

                let symptoms = self.selected.clone();
                let url = ctx.props().config.predict_url.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let response = request_prediction(&url, symptoms).await;
                    link.send_message(Msg::Predicted(response));
                });
                true
            }
            Msg::Predicted(response) => {
                self.prediction = Some(response);
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page disease-page">
                <header class="page-header centered">
                    <h1>{ "Disease Detection" }</h1>
                    <p>{ "AI-powered cattle health assessment using 4 machine learning models" }</p>
                </header>

                <div class="disease-grid">
                    { self.render_form(ctx) }
                    { self.render_results() }
                </div>
            </div>
        }
    }
}

impl DiseasePage {
    fn filtered_symptoms(&self) -> Vec<&'static str> {
        let term = self.search.to_lowercase();
        SYMPTOMS
            .iter()
            .copied()
            .filter(|symptom| symptom.to_lowercase().contains(&term))
            .collect()
    }

    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let filtered = self.filtered_symptoms();

        let on_search = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetSearch(input.value())
        });

        html! {
            <div class="panel">
                <div class="panel-header">
                    <h2>{ "Symptom Selection" }</h2>
                    <p>{ format!("Select at least {MIN_SYMPTOMS} symptoms observed in the cattle") }</p>
                </div>

                <div class="panel-body">
                    <label>{ "Search Symptoms" }</label>
                    <input
                        type="text"
                        placeholder="Type to search symptoms..."
                        value={self.search.clone()}
                        oninput={on_search}
                    />

                    <label>{ format!("Available Symptoms ({})", filtered.len()) }</label>
                    <div class="symptom-grid">
                        { for filtered.iter().map(|symptom| self.render_symptom(ctx, symptom)) }
                    </div>

                    { self.render_selected(ctx) }
                    { self.render_predict_button(ctx) }
                </div>
            </div>
        }
    }

    fn render_symptom(&self, ctx: &Context<Self>, symptom: &'static str) -> Html {
        let checked = self.selected.iter().any(|s| s == symptom);
        let onchange = ctx
            .link()
            .callback(move |_: Event| Msg::ToggleSymptom(symptom.to_string()));

        html! {
            <label class={classes!("symptom-item", checked.then_some("symptom-item-selected"))}>
                <input type="checkbox" {checked} {onchange} />
                <span>{ prediction::display_name(symptom) }</span>
            </label>
        }
    }

    fn render_selected(&self, ctx: &Context<Self>) -> Html {
        if self.selected.is_empty() {
            return html! {};
        }

        html! {
            <div class="selected-symptoms">
                <label>{ format!("Selected ({}):", self.selected.len()) }</label>
                <div class="chip-row">
                    { for self.selected.iter().map(|symptom| {
                        let symptom_owned = symptom.clone();
                        let onclick = ctx.link().callback(move |_: MouseEvent| {
                            Msg::ToggleSymptom(symptom_owned.clone())
                        });
                        html! {
                            <span class="chip">
                                { prediction::display_name(symptom) }
                                <button class="chip-remove" {onclick}>{ "×" }</button>
                            </span>
                        }
                    }) }
                </div>
            </div>
        }
    }

    fn render_predict_button(&self, ctx: &Context<Self>) -> Html {
        let ready = prediction::can_submit(&self.selected);
        let label = if self.loading {
            "Analyzing...".to_string()
        } else if !ready {
            let missing = MIN_SYMPTOMS - self.selected.len();
            format!(
                "Select {missing} more symptom{}",
                if missing > 1 { "s" } else { "" }
            )
        } else {
            "Predict Disease".to_string()
        };

        html! {
            <button
                class="btn-primary predict-btn"
                disabled={!ready || self.loading}
                onclick={ctx.link().callback(|_| Msg::Predict)}
            >
                { label }
            </button>
        }
    }

    fn render_results(&self) -> Html {
        let body = match &self.prediction {
            None => html! {
                <div class="results-placeholder">
                    <p>{ "Select symptoms and click \"Predict Disease\"" }</p>
                </div>
            },
            Some(prediction) => {
                let consensus = prediction.predictions.consensus();
                html! {
                    <>
                        <div class="consensus-card">
                            <h3>{ "Consensus Prediction" }</h3>
                            <div class="consensus-row">
                                <span class="consensus-disease">
                                    { prediction::display_name(&consensus.disease) }
                                </span>
                                <span class="consensus-confidence">
                                    { format!("{}% Agreement", consensus.confidence) }
                                </span>
                            </div>
                            <div class="confidence-meter">
                                <div
                                    class="meter-fill"
                                    style={format!("width: {}%", consensus.confidence)}
                                />
                            </div>
                        </div>

                        <div class="model-results">
                            <h3>{ "Individual Model Predictions" }</h3>
                            <div class="model-grid">
                                { for prediction.predictions.labels().iter().map(|(model, disease)| html! {
                                    <div class="model-card">
                                        <span class="model-name">{ *model }</span>
                                        <p class="model-disease">{ prediction::display_name(disease) }</p>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div class="analyzed-symptoms">
                            <h3>{ format!("Analyzed Symptoms ({})", prediction.input_symptoms.len()) }</h3>
                            <div class="chip-row">
                                { for prediction.input_symptoms.iter().map(|symptom| html! {
                                    <span class="chip chip-muted">
                                        { prediction::display_name(symptom) }
                                    </span>
                                }) }
                            </div>
                        </div>

                        <div class="disclaimer">
                            <p><b>{ "Veterinary Disclaimer" }</b></p>
                            <p>
                                { "These ML predictions are for informational purposes only. \
                                Please consult with a qualified veterinarian for proper \
                                diagnosis and treatment." }
                            </p>
                        </div>
                    </>
                }
            }
        };

        html! {
            <div class="panel">
                <div class="panel-header">
                    <h2>{ "ML Model Predictions" }</h2>
                    <p>{ "Results from 4 machine learning algorithms" }</p>
                </div>
                <div class="panel-body">{ body }</div>
            </div>
        }
    }
}

/// One classification request. Failures never surface as errors: a non-2xx
/// answer substitutes the HTTP fallback set, a network/parse failure the
/// exception fallback set.
async fn request_prediction(url: &str, symptoms: Vec<String>) -> PredictionResponse {
    let request = Request::post(url).json(&PredictionRequest {
        symptoms: symptoms.clone(),
    });

    match request {
        Ok(request) => match request.send().await {
            Ok(response) if response.ok() => match response.json::<PredictionResponse>().await {
                Ok(parsed) => parsed,
                Err(e) => {
                    error!(format!("Failed to parse prediction response: {e}"));
                    PredictionResponse::network_error_fallback(symptoms)
                }
            },
            Ok(response) => {
                error!(format!("Prediction error: HTTP {}", response.status()));
                PredictionResponse::http_error_fallback(symptoms)
            }
            Err(e) => {
                error!(format!("Prediction error: {e}"));
                PredictionResponse::network_error_fallback(symptoms)
            }
        },
        Err(e) => {
            error!(format!("Failed to encode prediction request: {e}"));
            PredictionResponse::network_error_fallback(symptoms)
        }
    }
}
