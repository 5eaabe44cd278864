//! Itinerary prompt rendering.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, TripRequest};

const ITINERARY_TEMPLATE_NAME: &str = "itinerary";

const ITINERARY_TEMPLATE: &str = "Crie um roteiro para uma viagem de exatos {{ days }} dias na cidade de {{ city }}, busque por lugares turisticos, lugares mais visitados, seja preciso nos dias de estadia fornecidos e limite o roteiro apenas na cidade fornecida. Forneça apenas em tópicos com nome do local onde ir em cada dia. Indique mais informações que achar relevantes, e insira descrições detalhadas e informações sobre como ir ao local. Não tente formatar seu texto com h1 ou pontos e asteriscos, deixe o texto normal.";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render the fixed itinerary prompt for a trip.
pub fn itinerary_prompt(request: &TripRequest) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_named_str(
        ITINERARY_TEMPLATE_NAME,
        ITINERARY_TEMPLATE,
        context! { city => request.city(), days => request.days().get() },
    )
    .map_err(|err| AppError::PromptRender(format!("{}: {}", ITINERARY_TEMPLATE_NAME, err)))
}
