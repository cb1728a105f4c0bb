//! Heuristic scoring of a text submission.
//!
//! Everything here is closed-form arithmetic over three text statistics:
//! word count, sentence count, and exclamation-mark count. There is no
//! error path; degenerate input (including empty text) still yields a
//! well-formed [`GradeResult`].

use crate::model::{Aspect, GradeResult, RubricItem, Submission, DEFAULT_TITLE};

/// Word count at which readability peaks.
const IDEAL_WORD_COUNT: f64 = 300.0;
/// Distance from the ideal at which readability reaches zero.
const READABILITY_SPAN: f64 = 600.0;
/// Coherence for text containing at least one period, before the bonus.
const COHERENCE_BASE: f64 = 0.7;
/// Cap on the per-sentence coherence bonus.
const COHERENCE_BONUS_CAP: f64 = 0.3;
/// Sentences needed to earn the full bonus at a linear rate.
const COHERENCE_SENTENCE_DIVISOR: f64 = 20.0;
/// Coherence for unsegmented text.
const COHERENCE_UNSEGMENTED: f64 = 0.4;
/// Exclamation marks that would drive grammar to zero without the floor.
const EXCLAMATION_DIVISOR: f64 = 20.0;
/// Lowest grammar score regardless of exclamation count.
const GRAMMAR_FLOOR: f64 = 0.4;

const WEIGHT_READABILITY: f64 = 0.4;
const WEIGHT_COHERENCE: f64 = 0.35;
const WEIGHT_GRAMMAR: f64 = 0.25;

const SHORT_SUBMISSION_WORDS: usize = 120;
const REVISION_THRESHOLD: u8 = 60;
const POLISH_THRESHOLD: u8 = 85;

pub const INSIGHT_EXPAND: &str =
    "Consider expanding the submission; under 120 words rarely develops an argument fully.";
pub const INSIGHT_ABRUPT_ENDING: &str =
    "The text ends abruptly. Close with a complete concluding sentence.";
pub const INSIGHT_REVISE_STRUCTURE: &str =
    "Revise the overall structure: group related points into clear paragraphs with topic sentences.";
pub const INSIGHT_POLISH: &str =
    "Strong submission. Polish the wording and add citations to support the key claims.";

/// Raw text statistics the scorer works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Whitespace-delimited tokens in the trimmed text.
    pub word_count: usize,
    /// Non-blank segments between periods in the trimmed text.
    pub sentence_count: usize,
    /// `!` characters in the untrimmed text.
    pub exclamation_count: usize,
    /// Whether the trimmed text contains a period at all.
    pub has_period: bool,
    /// Whether the trimmed text ends with a period.
    pub ends_with_period: bool,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        Self {
            word_count: trimmed.split_whitespace().count(),
            sentence_count: trimmed
                .split('.')
                .filter(|segment| !segment.trim().is_empty())
                .count(),
            exclamation_count: text.matches('!').count(),
            has_period: trimmed.contains('.'),
            ends_with_period: trimmed.ends_with('.'),
        }
    }
}

/// The three sub-scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub readability: f64,
    pub coherence: f64,
    pub grammar: f64,
}

impl SubScores {
    pub fn from_stats(stats: &TextStats) -> Self {
        let words = stats.word_count as f64;
        let readability =
            (1.0 - (IDEAL_WORD_COUNT - words).abs() / READABILITY_SPAN).clamp(0.0, 1.0);

        let coherence = if stats.has_period {
            let bonus = (stats.sentence_count as f64 / COHERENCE_SENTENCE_DIVISOR)
                .min(COHERENCE_BONUS_CAP);
            (COHERENCE_BASE + bonus).clamp(0.0, 1.0)
        } else {
            COHERENCE_UNSEGMENTED
        };

        let grammar = (1.0 - stats.exclamation_count as f64 / EXCLAMATION_DIVISOR)
            .clamp(GRAMMAR_FLOOR, 1.0);

        Self {
            readability,
            coherence,
            grammar,
        }
    }

    /// Weighted composite on the 0–100 scale.
    pub fn composite(&self) -> u8 {
        let weighted = WEIGHT_READABILITY * self.readability
            + WEIGHT_COHERENCE * self.coherence
            + WEIGHT_GRAMMAR * self.grammar;
        round_half_up(weighted * 100.0).clamp(0.0, 100.0) as u8
    }
}

/// Round to the nearest integer, with `x.5` going up.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn percent(x: f64) -> u32 {
    round_half_up(x * 100.0) as u32
}

fn points(x: f64) -> u8 {
    round_half_up(x * 10.0).clamp(0.0, 10.0) as u8
}

fn rubric_item(aspect: Aspect, sub_score: f64) -> RubricItem {
    let pct = percent(sub_score);
    let comment = match aspect {
        Aspect::StructureAndOrganization => {
            format!("Length and layout sit at {pct}% of the target profile.")
        }
        Aspect::CoherenceAndArgument => {
            format!("Sentence segmentation supports the argument at {pct}%.")
        }
        Aspect::GrammarAndStyle => {
            format!("Punctuation restraint and style rated at {pct}%.")
        }
    };
    RubricItem {
        aspect,
        comment,
        points: points(sub_score),
    }
}

/// Compute the text statistics and sub-scores without building a result.
pub fn score_components(text: &str) -> (TextStats, SubScores) {
    let stats = TextStats::from_text(text);
    (stats, SubScores::from_stats(&stats))
}

/// Grade a title and text.
///
/// Pure and deterministic: identical arguments always produce an identical
/// result. Blank titles resolve to [`DEFAULT_TITLE`].
pub fn grade(title: &str, text: &str) -> GradeResult {
    let (stats, sub) = score_components(text);
    let score = sub.composite();

    tracing::debug!(
        words = stats.word_count,
        sentences = stats.sentence_count,
        exclamations = stats.exclamation_count,
        readability = sub.readability,
        coherence = sub.coherence,
        grammar = sub.grammar,
        score,
        "scored submission"
    );

    let rubric = vec![
        rubric_item(Aspect::StructureAndOrganization, sub.readability),
        rubric_item(Aspect::CoherenceAndArgument, sub.coherence),
        rubric_item(Aspect::GrammarAndStyle, sub.grammar),
    ];

    let mut insights = Vec::new();
    if stats.word_count < SHORT_SUBMISSION_WORDS {
        insights.push(INSIGHT_EXPAND.to_string());
    }
    if !stats.ends_with_period {
        insights.push(INSIGHT_ABRUPT_ENDING.to_string());
    }
    if score < REVISION_THRESHOLD {
        insights.push(INSIGHT_REVISE_STRUCTURE.to_string());
    }
    if score > POLISH_THRESHOLD {
        insights.push(INSIGHT_POLISH.to_string());
    }

    let title = match title.trim() {
        "" => DEFAULT_TITLE.to_string(),
        t => t.to_string(),
    };

    GradeResult {
        title,
        score,
        rubric,
        insights,
    }
}

/// Grade a [`Submission`].
pub fn grade_submission(submission: &Submission) -> GradeResult {
    grade(&submission.title, &submission.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    /// `n` words split into `count` period-terminated sentences.
    fn sentences(n: usize, count: usize) -> String {
        let per = n / count;
        let mut out = Vec::new();
        for i in 0..count {
            let len = if i == count - 1 { n - per * i } else { per };
            out.push(format!("{}.", words(len)));
        }
        out.join(" ")
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_text_scenario() {
        let (stats, sub) = score_components("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert!(approx(sub.readability, 0.5));
        assert!(approx(sub.coherence, 0.4));
        assert!(approx(sub.grammar, 1.0));

        let result = grade("", "");
        assert_eq!(result.score, 59);
        assert_eq!(
            result.insights,
            vec![INSIGHT_EXPAND, INSIGHT_ABRUPT_ENDING, INSIGHT_REVISE_STRUCTURE]
        );
        assert_eq!(result.title, DEFAULT_TITLE);
    }

    #[test]
    fn ideal_length_scenario() {
        let text = sentences(300, 10);
        let (stats, sub) = score_components(&text);
        assert_eq!(stats.word_count, 300);
        assert_eq!(stats.sentence_count, 10);
        assert!(approx(sub.readability, 1.0));
        assert!(approx(sub.coherence, 1.0));
        assert!(approx(sub.grammar, 1.0));

        let result = grade("Essay", &text);
        assert_eq!(result.score, 100);
        assert_eq!(result.insights, vec![INSIGHT_POLISH]);
        assert!(result.rubric.iter().all(|item| item.points == 10));
    }

    #[test]
    fn exclamation_floor_scenario() {
        let text = format!("{}{}", words(50), "!".repeat(25));
        let (stats, sub) = score_components(&text);
        assert_eq!(stats.exclamation_count, 25);
        assert!(approx(sub.grammar, 0.4));
    }

    #[test]
    fn grammar_never_below_floor() {
        for n in [0, 5, 12, 20, 21, 100, 1000] {
            let (_, sub) = score_components(&"!".repeat(n));
            assert!(sub.grammar >= 0.4, "grammar {} for {n} marks", sub.grammar);
        }
    }

    #[test]
    fn exclamations_counted_in_untrimmed_text() {
        let (stats, _) = score_components("  hello world!  ");
        assert_eq!(stats.exclamation_count, 1);
    }

    #[test]
    fn unsegmented_text_has_fixed_coherence() {
        for text in [words(3), words(300), format!("{}!!!", words(700))] {
            let (stats, sub) = score_components(&text);
            assert!(!stats.has_period);
            assert_eq!(sub.coherence, 0.4);
        }
    }

    #[test]
    fn coherence_bonus_is_capped() {
        let (_, two) = score_components("One. Two.");
        assert!(approx(two.coherence, 0.8));
        let (_, many) = score_components(&sentences(200, 40));
        assert!(approx(many.coherence, 1.0));
    }

    #[test]
    fn sentence_count_ignores_blank_segments() {
        let stats = TextStats::from_text("First... Second.  . Third");
        assert_eq!(stats.sentence_count, 3);
        assert!(!stats.ends_with_period);
    }

    #[test]
    fn readability_monotone_away_from_ideal() {
        let readability = |n: usize| score_components(&words(n)).1.readability;
        let mut prev = readability(300);
        for n in 301..=700 {
            let r = readability(n);
            assert!(r <= prev, "readability rose at {n} words");
            prev = r;
        }
        let mut prev = readability(300);
        for n in (0..300).rev() {
            let r = readability(n);
            assert!(r <= prev, "readability rose at {n} words");
            prev = r;
        }
        assert!(approx(readability(600), 0.5));
        assert_eq!(readability(900), 0.0);
        assert_eq!(readability(1500), 0.0);
    }

    #[test]
    fn score_and_points_in_range() {
        let inputs = [
            String::new(),
            "   ".to_string(),
            "!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!".to_string(),
            words(10),
            sentences(120, 6),
            sentences(450, 30),
            words(5000),
            format!("{}.", "a.".repeat(300)),
        ];
        for text in &inputs {
            let result = grade("t", text);
            assert!(result.score <= 100);
            assert_eq!(result.rubric.len(), 3);
            assert!(result.rubric.iter().all(|item| item.points <= 10));
            assert!(result.insights.len() <= 4);
        }
    }

    #[test]
    fn insight_thresholds_are_strict() {
        // 119 words is short, 120 is not.
        let short = grade("", &sentences(119, 7));
        assert!(short.insights.iter().any(|i| i == INSIGHT_EXPAND));
        let enough = grade("", &sentences(120, 8));
        assert!(!enough.insights.iter().any(|i| i == INSIGHT_EXPAND));

        // Unsegmented, no `!`: 7 words scores 59, 15 words scores 60.
        let below = grade("", &words(7));
        assert_eq!(below.score, 59);
        assert_eq!(
            below.insights,
            vec![INSIGHT_EXPAND, INSIGHT_ABRUPT_ENDING, INSIGHT_REVISE_STRUCTURE]
        );
        let at_sixty = grade("", &words(15));
        assert_eq!(at_sixty.score, 60);
        assert_eq!(at_sixty.insights, vec![INSIGHT_EXPAND, INSIGHT_ABRUPT_ENDING]);

        // Fully segmented, no `!`: 75 words scores 85, 90 words scores 86.
        let at_85 = grade("", &sentences(75, 15));
        assert_eq!(at_85.score, 85);
        assert_eq!(at_85.insights, vec![INSIGHT_EXPAND]);
        let at_86 = grade("", &sentences(90, 15));
        assert_eq!(at_86.score, 86);
        assert_eq!(at_86.insights, vec![INSIGHT_EXPAND, INSIGHT_POLISH]);
    }

    #[test]
    fn grading_is_deterministic() {
        let text = sentences(180, 7);
        assert_eq!(grade("Same", &text), grade("Same", &text));
    }

    #[test]
    fn rubric_order_and_comments() {
        let result = grade("", "");
        let aspects: Vec<Aspect> = result.rubric.iter().map(|item| item.aspect).collect();
        assert_eq!(aspects, Aspect::ALL.to_vec());
        assert!(result.rubric[0].comment.contains("50%"));
        assert_eq!(result.rubric[0].points, 5);
        assert!(result.rubric[1].comment.contains("40%"));
        assert_eq!(result.rubric[1].points, 4);
        assert!(result.rubric[2].comment.contains("100%"));
        assert_eq!(result.rubric[2].points, 10);
    }

    #[test]
    fn blank_title_defaults() {
        assert_eq!(grade("   ", "text").title, DEFAULT_TITLE);
        assert_eq!(grade("\t\n", "text").title, DEFAULT_TITLE);
        assert_eq!(grade("  My Essay ", "text").title, "My Essay");
    }

    #[test]
    fn grade_submission_matches_grade() {
        let submission = Submission::new("Report", "A short report.");
        assert_eq!(grade_submission(&submission), grade("Report", "A short report."));
    }

    #[test]
    fn round_half_up_behaviour() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }
}
