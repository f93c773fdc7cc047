use crate::llm::{CompletionClient, CompletionError};
use crate::models::{CheckpointQuestion, Role, Turn};
use crate::sessions::SessionState;

const SUMMARIZER_PERSONA: &str = "You are an expert educational content summarizer. You condense \
finished tutorial sections and their checkpoint outcomes into short summaries that a tutor can \
use as context in later conversations.";

#[derive(Debug)]
pub struct SectionSummaryRequest<'a> {
    pub section_id: &'a str,
    pub section_content: &'a str,
    pub checkpoint_question: &'a CheckpointQuestion,
    pub user_answer: Option<&'a str>,
    pub is_correct: Option<bool>,
}

/// One-shot summary of a finished section plus its checkpoint outcome. On
/// success the summary is stored for the section and a synthetic system
/// turn is appended so future message windows pick it up as ordinary
/// context. A failed upstream call stores nothing.
pub async fn generate_section_summary(
    state: &mut SessionState,
    client: &CompletionClient,
    model: &str,
    request: &SectionSummaryRequest<'_>,
) -> Result<String, CompletionError> {
    let messages = vec![
        Turn {
            role: Role::System,
            content: SUMMARIZER_PERSONA.to_string(),
        },
        Turn {
            role: Role::User,
            content: summary_prompt(request),
        },
    ];

    let summary = client.complete(model, &messages).await?;

    state.set_summary(request.section_id, summary.clone());
    state.append_turn(
        Role::System,
        format!("Section {} Summary: {summary}", request.section_id),
    );

    Ok(summary)
}

fn summary_prompt(request: &SectionSummaryRequest<'_>) -> String {
    let mut prompt = format!(
        "The learner has just finished a tutorial section and answered its checkpoint \
         question.\n\nSection {}:\n{}\n\nCheckpoint question:\n{}",
        request.section_id, request.section_content, request.checkpoint_question.question,
    );

    for option in &request.checkpoint_question.options {
        if option.id == request.checkpoint_question.correct_answer_id {
            prompt.push_str(&format!("\n{}. {} (correct)", option.id, option.text));
        } else {
            prompt.push_str(&format!("\n{}. {}", option.id, option.text));
        }
    }

    if let Some(answer) = request.user_answer {
        prompt.push_str(&format!("\n\nThe learner answered: {answer}"));
        match request.is_correct {
            Some(true) => prompt.push_str(" (correct)"),
            Some(false) => prompt.push_str(" (incorrect)"),
            None => {}
        }
    }

    prompt.push_str(
        "\n\nWrite a 3-5 sentence summary covering the key concepts of this section, the main \
         point of the checkpoint question, and how the two relate.",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CheckpointOption;

    #[test]
    fn summary_prompt_includes_outcome_and_marks_correct_option() {
        let question = CheckpointQuestion {
            question: "Why is data processing crucial in an NLP pipeline?".to_string(),
            options: vec![
                CheckpointOption {
                    id: "a".to_string(),
                    text: "It makes the text more readable for humans".to_string(),
                },
                CheckpointOption {
                    id: "b".to_string(),
                    text: "It prepares text data for machine learning algorithms".to_string(),
                },
            ],
            correct_answer_id: "b".to_string(),
        };

        let prompt = summary_prompt(&SectionSummaryRequest {
            section_id: "2.1",
            section_content: "Data processing prepares raw text for modeling.",
            checkpoint_question: &question,
            user_answer: Some("a"),
            is_correct: Some(false),
        });

        assert!(prompt.contains("Section 2.1:"));
        assert!(prompt.contains("Why is data processing crucial in an NLP pipeline?"));
        assert_eq!(prompt.matches("(correct)").count(), 1);
        assert!(prompt.contains("The learner answered: a (incorrect)"));
        assert!(prompt.contains("3-5 sentence summary"));
    }

    #[test]
    fn summary_prompt_omits_answer_block_when_not_supplied() {
        let question = CheckpointQuestion {
            question: "Q".to_string(),
            options: Vec::new(),
            correct_answer_id: "a".to_string(),
        };

        let prompt = summary_prompt(&SectionSummaryRequest {
            section_id: "1.1",
            section_content: "content",
            checkpoint_question: &question,
            user_answer: None,
            is_correct: None,
        });

        assert!(!prompt.contains("The learner answered"));
    }
}
