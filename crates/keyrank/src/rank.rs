//! Lemma ranking over pre-tokenized documents.
//!
//! Two scoring paths exist behind the same entry points. The pipeline path
//! ("textrank") accumulates co-occurrence degree within a sliding window;
//! the legacy variant path (no pipeline selector) scores plain lemma
//! frequency. Both skip stopwords and non-content POS tags, sort by
//! descending score, and truncate to `top_n`.

use crate::error::{ExtractError, Result};
use crate::types::{Determinism, DocumentInput, ExtractOutput, ScoredKeyword, Token};
use crate::workspace::ExtractWorkspace;
use std::cmp::Ordering;

/// Window size (in candidate-stream positions) for co-occurrence counting.
const COOCCURRENCE_WINDOW: usize = 3;

/// POS tags eligible as keyword candidates.
fn is_candidate(token: &Token) -> bool {
    !token.is_stopword && matches!(token.pos.as_str(), "NOUN" | "ADJ" | "VERB")
}

/// Rank one document into scored keywords, reusing the given workspace.
pub fn rank_document(doc: &DocumentInput, ws: &mut ExtractWorkspace) -> Result<ExtractOutput> {
    validate(doc)?;
    ws.clear();

    match doc.pipeline.as_deref() {
        Some("textrank") => degree_scores(&doc.tokens, ws),
        Some(other) => return Err(ExtractError::UnknownPipeline(other.to_string())),
        None => frequency_scores(&doc.tokens, ws),
    }

    Ok(into_output(ws, doc.config.top_n, doc.config.determinism))
}

/// Structural invariants of the wire format: non-empty spans, strictly
/// increasing offsets, dense token indices.
fn validate(doc: &DocumentInput) -> Result<()> {
    let mut prev_end = 0usize;
    for (idx, token) in doc.tokens.iter().enumerate() {
        if token.start >= token.end {
            return Err(ExtractError::InvalidDocument {
                reason: format!("token {} has an empty span", token.token_idx),
            });
        }
        if idx > 0 && token.start < prev_end {
            return Err(ExtractError::InvalidDocument {
                reason: format!("token {} overlaps its predecessor", token.token_idx),
            });
        }
        if token.token_idx != idx {
            return Err(ExtractError::InvalidDocument {
                reason: format!("token index {} out of sequence at position {idx}", token.token_idx),
            });
        }
        prev_end = token.end;
    }
    Ok(())
}

/// Co-occurrence degree scoring: each candidate pair within the window and
/// the same sentence contributes one unit to both lemmas.
fn degree_scores(tokens: &[Token], ws: &mut ExtractWorkspace) {
    for (i, a) in tokens.iter().enumerate() {
        if !is_candidate(a) {
            continue;
        }
        let window_end = (i + COOCCURRENCE_WINDOW + 1).min(tokens.len());
        for b in &tokens[i + 1..window_end] {
            // sentence_idx is non-decreasing, so the window ends here
            if b.sentence_idx != a.sentence_idx {
                break;
            }
            if !is_candidate(b) {
                continue;
            }
            *ws.scores.entry(a.lemma.clone()).or_insert(0.0) += 1.0;
            *ws.scores.entry(b.lemma.clone()).or_insert(0.0) += 1.0;
        }
    }
}

/// Legacy variant scoring: one unit per candidate occurrence.
fn frequency_scores(tokens: &[Token], ws: &mut ExtractWorkspace) {
    for token in tokens {
        if is_candidate(token) {
            *ws.scores.entry(token.lemma.clone()).or_insert(0.0) += 1.0;
        }
    }
}

fn into_output(ws: &mut ExtractWorkspace, top_n: usize, determinism: Determinism) -> ExtractOutput {
    ws.ranked.extend(ws.scores.drain());

    match determinism {
        Determinism::Deterministic => ws.ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        }),
        Determinism::Relaxed => ws
            .ranked
            .sort_unstable_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal)),
    }

    let keywords = ws
        .ranked
        .drain(..)
        .take(top_n)
        .map(|(lemma, score)| ScoredKeyword { lemma, score })
        .collect();

    ExtractOutput { keywords }
}
