//! Law summary pipeline.
//!
//! Flow: build six prompts → call the model for each → clean markdown →
//!       check the primary summary → split summary sentences → assemble.
//!
//! The six calls are joined with `try_join!`, so the first failure cancels
//! the calls still in flight and fails the request. No partial results.

use tracing::{debug, info, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::TextModel;
use crate::summary::assembler::{assemble, LawSummaryResponse, SummaryParts};
use crate::summary::markdown::clean_markdown;
use crate::summary::prompts::{build_bill_prompt, SummaryPrompt};

/// Runs the full law summary pipeline for one request.
pub async fn generate_law_summary(
    model: &dyn TextModel,
    law_content: &str,
) -> Result<LawSummaryResponse, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("law_summary", %request_id, model = model.model_id());

    async move {
        info!(
            "Generating law summary: {} prompts, {} chars of input",
            SummaryPrompt::ALL.len(),
            law_content.chars().count()
        );

        let (law_summary, summary, background, example, agree, disagree) = tokio::try_join!(
            run_prompt(model, SummaryPrompt::LawContent, law_content),
            run_prompt(model, SummaryPrompt::Summary, law_content),
            run_prompt(model, SummaryPrompt::Background, law_content),
            run_prompt(model, SummaryPrompt::Example, law_content),
            run_prompt(model, SummaryPrompt::Agree, law_content),
            run_prompt(model, SummaryPrompt::Disagree, law_content)
        )?;

        if law_summary.is_empty() {
            return Err(AppError::EmptyOutput("law summary"));
        }

        let response = assemble(SummaryParts {
            law_content: law_summary,
            summary,
            background,
            example,
            agree,
            disagree,
        });

        info!(
            "Law summary generated: {} summary fragments",
            response.law_summary_content.len()
        );
        Ok(response)
    }
    .instrument(span)
    .await
}

/// Legacy single-prompt summary for a bill title.
pub async fn generate_bill_summary(
    model: &dyn TextModel,
    bill_title: &str,
) -> Result<String, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("bill_summary", %request_id, model = model.model_id());

    async move {
        let raw = model.generate(&build_bill_prompt(bill_title)).await?;
        let content = clean_markdown(&raw);
        if content.is_empty() {
            return Err(AppError::EmptyOutput("bill summary"));
        }
        Ok(content)
    }
    .instrument(span)
    .await
}

async fn run_prompt(
    model: &dyn TextModel,
    prompt: SummaryPrompt,
    law_content: &str,
) -> Result<String, AppError> {
    let raw = model.generate(&prompt.build(law_content)).await?;
    let cleaned = clean_markdown(&raw);
    debug!(
        "Prompt '{}' answered: {} chars raw, {} chars cleaned",
        prompt.label(),
        raw.chars().count(),
        cleaned.chars().count()
    );
    Ok(cleaned)
}
