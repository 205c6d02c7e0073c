use scraper::{ElementRef, Html, Selector};

use crate::domain::{
    company::ExtractionResult,
    page::Page,
    selector_strategy::{is_short_text, SelectorStrategy, CASCADE, FALLBACK_SELECTOR},
};

use super::PipelineError;

/// Runs the selector cascade over the page and returns the names of the first
/// strategy that produced anything. Falls back to short heading/emphasis text.
pub fn extract_candidates(page: &Page) -> Result<ExtractionResult, PipelineError> {
    extract_from_markup(page.markup())
}

pub fn extract_from_markup(markup: &str) -> Result<ExtractionResult, PipelineError> {
    let html_document = Html::parse_document(markup);

    for (i, strategy) in CASCADE.iter().enumerate() {
        let companies = ExtractionResult::from_candidates(select_texts(&html_document, strategy)?);

        if !companies.is_empty() {
            log::info!(
                "Strategy {} {:?} matched {} companies",
                i + 1,
                strategy,
                companies.len()
            );
            return Ok(companies);
        }
    }

    let fallback_selector = parse_selector(FALLBACK_SELECTOR)?;
    let companies = ExtractionResult::from_candidates(
        html_document
            .select(&fallback_selector)
            .map(element_text)
            .filter(|text| is_short_text(text.trim())),
    );

    log::info!(
        "No strategy matched, generic fallback found {} candidates",
        companies.len()
    );

    Ok(companies)
}

fn select_texts(
    html_document: &Html,
    strategy: &SelectorStrategy,
) -> Result<Vec<String>, PipelineError> {
    match strategy {
        SelectorStrategy::Css(css) => {
            let selector = parse_selector(css)?;
            Ok(html_document.select(&selector).map(element_text).collect())
        }
        SelectorStrategy::ClassContains(needle) => {
            let selector = parse_selector("[class]")?;
            Ok(html_document
                .select(&selector)
                .filter(|tag| {
                    tag.value()
                        .attr("class")
                        .is_some_and(|class| SelectorStrategy::class_matches(needle, class))
                })
                .map(element_text)
                .collect())
        }
    }
}

fn parse_selector(css: &str) -> Result<Selector, PipelineError> {
    Selector::parse(css)
        .map_err(|e| PipelineError::Parse(format!("invalid selector {:?}: {:?}", css, e)))
}

fn element_text(tag: ElementRef) -> String {
    tag.text().collect()
}
