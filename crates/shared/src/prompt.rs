use std::collections::BTreeMap;

use crate::models::CheckpointQuestion;
use crate::sessions::SessionState;

const PERSONA: &str = "You are an expert in project-based learning. You specialize in teaching \
AI and deep learning through projects. Task: The learner wants to discuss some content in the \
tutorial with you. You will be given the framework of the tutorial, a summary of the learner's \
current progress, and the content they have questions about.";

const REQUIREMENTS: &str = "Requirements:\n\
1. Be engaging, helpful, and ready to answer questions as long as they relate to the tutorial. \
Do not give away the full answer to a complex question right away. Guide the learner to think \
first. Progressively provide more assistance if the learner has trouble figuring out the \
problem on their own.\n\
2. If the learner deviates too much from the tutorial, remind them to stay on track.\n\
3. Encourage the learner when needed, such as when they have trouble fixing a bug.\n\
4. All math formulas should be written in LaTex format and surrounded by dollar signs ($ or $$).\n\
5. All hyperlinks should be written in markdown format like this: [link text](link URL).\n\
6. Refer to the current section content and the last checkpoint question when they help answer \
the learner's question.\n\
7. Take the learner's previous checkpoint choices into account when judging what they have \
already understood.\n\
8. Use the conversation history to stay consistent with what has already been discussed.\n\
9. When a section summary is available, use it to connect the current discussion to the parts \
of the tutorial the learner has already completed.";

/// Per-turn prompt inputs taken from the chat request. Absent fields simply
/// omit their block; nothing else may skip a block whose precondition holds.
#[derive(Debug, Default)]
pub struct PromptContext<'a> {
    pub current_section: Option<&'a str>,
    pub section_content: Option<&'a str>,
    pub last_checkpoint_question: Option<&'a CheckpointQuestion>,
    pub user_choices: Option<&'a BTreeMap<String, String>>,
}

/// Builds the single system-role instruction for one chat turn. Assembly
/// order is fixed: persona, current section, stored section summary, last
/// checkpoint question, prior choices, behavioral requirements.
pub fn compose_system_prompt(state: &SessionState, context: &PromptContext<'_>) -> String {
    let mut prompt = String::from(PERSONA);

    if let Some(section_id) = context.current_section.filter(|id| !id.is_empty()) {
        if let Some(content) = context.section_content.filter(|content| !content.is_empty()) {
            prompt.push_str(&format!("\n\nCurrent section ({section_id}):\n{content}"));
        }

        if let Some(summary) = state.summary(section_id) {
            prompt.push_str(&format!("\n\nSection summary:\n{summary}"));
        }
    }

    if let Some(question) = context.last_checkpoint_question
        && !question.question.is_empty()
        && !question.options.is_empty()
        && !question.correct_answer_id.is_empty()
    {
        prompt.push_str(&format!(
            "\n\nLast checkpoint question:\n{}",
            question.question
        ));
        for option in &question.options {
            // The correct tag lives only in this private tutor context; it
            // is never rendered to the learner.
            if option.id == question.correct_answer_id {
                prompt.push_str(&format!("\n{}. {} (correct)", option.id, option.text));
            } else {
                prompt.push_str(&format!("\n{}. {}", option.id, option.text));
            }
        }
    }

    if let Some(choices) = context.user_choices.filter(|choices| !choices.is_empty()) {
        prompt.push_str("\n\nLearner's previous checkpoint choices:");
        for (section_id, choice) in choices.iter() {
            prompt.push_str(&format!("\nSection {section_id}: {choice}"));
        }
    }

    prompt.push_str("\n\n");
    prompt.push_str(REQUIREMENTS);
    prompt
}
