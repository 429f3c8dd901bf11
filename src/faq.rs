// File: src/faq.rs
//! Keyword routing for the chat/FAQ surface.
//!
//! Protocol-name tokens take priority: any word of the question that exactly
//! matches a canonical key or alias returns that protocol's description.
//! Otherwise the full lowercased text is tested against fixed keyword sets in
//! a fixed priority order; this is an ordered cascade, not a classifier, and
//! the order must be preserved for deterministic answers.

use std::sync::Arc;

use tracing::debug;

use crate::errors::ResolveError;
use crate::protocols::ProtocolRegistry;

/// Answer plus optional suggested follow-up questions.
#[derive(Debug, Clone)]
pub struct FaqAnswer {
    pub answer: String,
    pub suggested_questions: Option<Vec<String>>,
}

/// Keyword sets checked in priority order, each with its canned paragraph.
const KEYWORD_ANSWERS: &[(&[&str], &str)] = &[
    (
        &["bridge", "transfer", "send"],
        "Emrys bridge allows you to transfer tokens between different blockchains quickly and securely. \
Just select your source and destination chains, the token, and the amount you want to transfer, and we'll handle the rest!",
    ),
    (
        &["wallet", "connect"],
        "To use Emrys bridge, you'll need to connect a compatible wallet for both your source and destination chains. \
We support multiple wallet providers including MetaMask, Phantom, and others.",
    ),
    (
        &["fee", "cost", "price"],
        "Fees on Emrys bridge vary depending on the source and destination chains. \
You'll see a detailed breakdown of all fees before you confirm your transaction, including gas fees and interchain fees.",
    ),
    (
        &["security", "safe", "secure"],
        "Security is our top priority at Emrys. We use advanced cryptographic techniques and have undergone \
rigorous security audits to ensure your assets are protected throughout the bridging process.",
    ),
    (
        &["time", "duration", "long", "wait"],
        "Most transfers on Emrys complete within a few minutes, but the exact time can vary depending on \
network conditions and the chains involved. You can track the status of your transfer in real-time.",
    ),
    (
        &["walrus", "storage"],
        "Walrus is our decentralized storage solution that securely stores transaction data across multiple networks. \
It ensures your cross-chain transaction data remains secure, immutable, and easily accessible at all times.",
    ),
    (
        &["token", "asset", "cryptocurrency"],
        "Emrys supports bridging of native tokens (like ETH, AVAX, SOL) and popular token standards like USDC and USDT. \
We're constantly adding support for more tokens.",
    ),
];

const FALLBACK_ANSWER: &str = "I'm here to help you navigate Emrys bridge! You can ask me about supported chains, \
tokens, fees, security, or any other aspect of our cross-chain bridge. \
If you have a technical issue, please contact our support team.";

/// Follow-up prompts surfaced alongside the generic fallback answer.
const SUGGESTED_QUESTIONS: &[&str] = &[
    "What is Emrys?",
    "Which chains are supported?",
    "How do fees work?",
    "Is Emrys secure?",
    "What tokens can I bridge?",
    "How long do transfers take?",
    "What is Walrus storage?",
];

pub struct FaqRouter {
    registry: Arc<ProtocolRegistry>,
}

impl FaqRouter {
    pub fn new(registry: Arc<ProtocolRegistry>) -> Self {
        Self { registry }
    }

    pub fn answer(&self, question: &str) -> Result<FaqAnswer, ResolveError> {
        let trimmed = question.trim();
        if trimmed.is_empty() {
            return Err(ResolveError::InvalidInput {
                reason: "question is empty".to_string(),
            });
        }

        let lowered = trimmed.to_lowercase();

        // Stage 1: protocol-name tokens beat the generic keyword cascade.
        for token in lowered.split_whitespace() {
            let token = token.trim_matches(|c: char| !c.is_alphanumeric());
            if token.is_empty() {
                continue;
            }
            if let Some(entry) = self.registry.lookup_exact(token) {
                debug!("Chat question matched protocol token '{}'", token);
                return Ok(FaqAnswer {
                    answer: entry.description.to_string(),
                    suggested_questions: None,
                });
            }
        }

        // Stage 2: ordered keyword cascade over the full text.
        for (keywords, answer) in KEYWORD_ANSWERS {
            if keywords.iter().any(|k| lowered.contains(k)) {
                return Ok(FaqAnswer {
                    answer: (*answer).to_string(),
                    suggested_questions: None,
                });
            }
        }

        // Stage 3: generic fallback with suggested follow-ups.
        Ok(FaqAnswer {
            answer: FALLBACK_ANSWER.to_string(),
            suggested_questions: Some(
                SUGGESTED_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> FaqRouter {
        FaqRouter::new(Arc::new(ProtocolRegistry::bundled().unwrap()))
    }

    #[test]
    fn fee_question_returns_fee_paragraph() {
        let answer = router().answer("What are the fees?").unwrap();
        assert!(answer.answer.contains("Fees on Emrys bridge"));
        assert!(answer.suggested_questions.is_none());
    }

    #[test]
    fn protocol_token_beats_keyword_cascade() {
        // "bridge" is a cascade keyword, but "ethereum" is a protocol token
        // and must win.
        let answer = router().answer("ethereum bridge").unwrap();
        assert!(answer.answer.contains("Ethereum"));
        assert!(!answer.answer.contains("select your source"));
    }

    #[test]
    fn ticker_aliases_work_as_tokens() {
        let answer = router().answer("can I move BTC?").unwrap();
        assert!(answer.answer.contains("Bitcoin"));
    }

    #[test]
    fn punctuation_does_not_block_token_matching() {
        let answer = router().answer("what is osmosis?").unwrap();
        assert!(answer.answer.contains("Osmosis"));
    }

    #[test]
    fn cascade_order_is_fixed() {
        let answer = router().answer("how much does it cost to move funds").unwrap();
        assert!(answer.answer.contains("detailed breakdown"));

        let answer = router().answer("is it safe to wait that long").unwrap();
        // security set outranks timing set
        assert!(answer.answer.contains("Security is our top priority"));
    }

    #[test]
    fn unmatched_question_gets_fallback_and_suggestions() {
        let answer = router().answer("how is the weather today").unwrap();
        assert!(answer.answer.contains("I'm here to help"));
        let suggestions = answer.suggested_questions.unwrap();
        assert!(suggestions.contains(&"What is Walrus storage?".to_string()));
    }

    #[test]
    fn empty_question_is_invalid() {
        assert!(matches!(
            router().answer("   "),
            Err(ResolveError::InvalidInput { .. })
        ));
    }
}
