use crate::models::{CheckpointOption, CheckpointQuestion};

/// Static lookup from tutorial section id to its checkpoint question.
/// Unknown section ids return a fixed default question instead of failing;
/// the frontend depends on this fallback.
pub fn question_for_section(section_id: &str) -> CheckpointQuestion {
    match section_id {
        "1.1" => question(
            "What is the main purpose of spam classification in the context of this project?",
            &[
                ("a", "To categorize emails by their sender"),
                ("b", "To filter unwanted messages from legitimate ones"),
                ("c", "To analyze the writing style of different authors"),
                ("d", "To compress text data for efficient storage"),
            ],
            "b",
        ),
        "1.2" => question(
            "Which of the following is NOT one of the key steps in the spam classification process?",
            &[
                ("a", "Data Collection"),
                ("b", "Text Preprocessing"),
                ("c", "Feature Extraction"),
                ("d", "Image Recognition"),
            ],
            "d",
        ),
        "1.3" => question(
            "By the end of this project, what will you have built?",
            &[
                ("a", "A language translation system"),
                ("b", "A spam classification system"),
                ("c", "A text summarization tool"),
                ("d", "A sentiment analysis model"),
            ],
            "b",
        ),
        "2.1" => question(
            "Why is data processing crucial in an NLP pipeline?",
            &[
                ("a", "It makes the text more readable for humans"),
                ("b", "It prepares text data for machine learning algorithms"),
                ("c", "It increases the size of the dataset"),
                ("d", "It translates text into different languages"),
            ],
            "b",
        ),
        "2.2" => question(
            "Which of the following is a characteristic of spam messages based on the sample data?",
            &[
                ("a", "They are always written in all caps"),
                ("b", "They often contain personal information"),
                ("c", "They frequently mention urgency or offers"),
                ("d", "They are always shorter than ham messages"),
            ],
            "c",
        ),
        "2.3" => question(
            "Which of the following is NOT a typical text preprocessing step?",
            &[
                ("a", "Lowercasing"),
                ("b", "Tokenization"),
                ("c", "Encryption"),
                ("d", "Removing Stop Words"),
            ],
            "c",
        ),
        "3.1" => question(
            "Why is text vectorization necessary in NLP?",
            &[
                ("a", "To make text more readable"),
                (
                    "b",
                    "To convert text into a format that machine learning algorithms can understand",
                ),
                ("c", "To reduce the size of the text data"),
                ("d", "To translate text into different languages"),
            ],
            "b",
        ),
        "3.2" => question(
            "Which of the following is NOT one of the three main text vectorization techniques discussed?",
            &[
                ("a", "Bag of Words (BOW)"),
                ("b", "TF-IDF"),
                ("c", "Word Embeddings"),
                ("d", "Binary Encoding"),
            ],
            "d",
        ),
        "3.3" => question(
            "What does the Bag of Words model disregard when representing text?",
            &[
                ("a", "Word frequency"),
                ("b", "Grammar and word order"),
                ("c", "The presence of words"),
                ("d", "All of the above"),
            ],
            "b",
        ),
        "4.1" => question(
            "Which of the following algorithms is particularly effective for text classification?",
            &[
                ("a", "K-means clustering"),
                ("b", "Principal Component Analysis (PCA)"),
                ("c", "Naive Bayes"),
                ("d", "Linear Regression"),
            ],
            "c",
        ),
        "4.2" => question(
            "Which of the following is NOT a common metric for evaluating classification models?",
            &[
                ("a", "Accuracy"),
                ("b", "Precision"),
                ("c", "Mean Squared Error (MSE)"),
                ("d", "F1-score"),
            ],
            "c",
        ),
        _ => question(
            "What are the three main text vectorization techniques discussed in this course?",
            &[
                ("a", "Bag of Words, TF-IDF, Word Embeddings"),
                ("b", "Word2Vec, GloVe, FastText"),
                ("c", "Tokenization, Stemming, Lemmatization"),
                ("d", "CNN, RNN, Transformer"),
            ],
            "a",
        ),
    }
}

fn question(
    text: &str,
    options: &[(&str, &str)],
    correct_answer_id: &str,
) -> CheckpointQuestion {
    CheckpointQuestion {
        question: text.to_string(),
        options: options
            .iter()
            .map(|(id, text)| CheckpointOption {
                id: (*id).to_string(),
                text: (*text).to_string(),
            })
            .collect(),
        correct_answer_id: correct_answer_id.to_string(),
    }
}
