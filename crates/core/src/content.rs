//! Bundled mock-trial reference content.

use crate::catalog::{Catalog, CatalogDraft, CatalogError};
use crate::model::{Category, ObjectionDraft, ObjectionId, ScenarioDraft, ScenarioId};

use crate::model::Category::{
    Advanced, Basic, Evidence, Intermediate, Procedure, Questioning, Testimony,
};

/// The bundled catalog: twelve objections and twelve scenarios.
///
/// # Errors
///
/// Returns `CatalogError` only if the bundled content itself is inconsistent.
pub fn builtin() -> Result<Catalog, CatalogError> {
    builtin_draft().validate()
}

#[must_use]
pub fn builtin_draft() -> CatalogDraft {
    CatalogDraft {
        objections: vec![
            objection(
                1,
                "Leading Question",
                "Asked by an attorney who is improperly suggesting the answer within the question.",
                &[
                    "You saw the defendant run the red light, didn't you?",
                    "The light was red when the car drove through, correct?",
                ],
                "The question suggests the answer the attorney wants. Ask a non-leading question like: 'What color was the traffic light when the car went through the intersection?'",
                &[Questioning, Basic],
            ),
            objection(
                2,
                "Relevance",
                "The evidence or testimony has no connection to the facts at issue in the case.",
                &[
                    "What color shirt was the witness wearing three days before the incident?",
                    "Did the defendant ever visit Chicago in the summer of 2017?",
                ],
                "The attorney must show how this evidence relates to the facts of the case. Otherwise, it wastes time and may confuse the issues.",
                &[Evidence, Basic],
            ),
            objection(
                3,
                "Hearsay",
                "Witness testimony reporting an out-of-court statement offered to prove the truth of the matter asserted.",
                &[
                    "My friend told me that he saw the defendant at the store that day.",
                    "The victim's mother said that he was afraid of the defendant.",
                ],
                "This is an out-of-court statement offered for its truth. Unless it falls under an exception, it's inadmissible hearsay.",
                &[Evidence, Advanced],
            ),
            objection(
                4,
                "Compound Question",
                "A question that contains multiple questions but calls for a single answer.",
                &[
                    "Did you see the car and did you notice its color?",
                    "Was the restaurant busy and were you seated immediately?",
                ],
                "The question contains multiple parts that require separate answers. The attorney should break it into separate questions.",
                &[Questioning, Basic],
            ),
            objection(
                5,
                "Speculation",
                "The witness is asked to guess, speculate, or make assumptions without personal knowledge.",
                &[
                    "If the light had been red, would the accident have happened?",
                    "What do you think the defendant was thinking at that moment?",
                ],
                "The witness is being asked to speculate beyond their personal knowledge. Witnesses should testify only to facts they observed.",
                &[Questioning, Intermediate],
            ),
            objection(
                6,
                "Assumes Facts Not in Evidence",
                "The question contains an assumption of facts that haven't been established.",
                &[
                    "When did you stop hitting your roommate?",
                    "What did you do with the knife after the argument?",
                ],
                "The question assumes facts (that the witness hit their roommate or had a knife) that haven't been established in evidence.",
                &[Questioning, Intermediate],
            ),
            objection(
                7,
                "Lack of Foundation",
                "Testimony or evidence is presented without establishing the necessary background or qualifications.",
                &[
                    "Attorney asking for expert opinion from a witness without establishing expertise",
                    "Showing a document to a witness without establishing its authenticity or relevance",
                ],
                "The attorney needs to lay proper foundation first by establishing the witness's knowledge, the document's authenticity, or other prerequisites.",
                &[Evidence, Intermediate],
            ),
            objection(
                8,
                "Argumentative",
                "The attorney is arguing with the witness rather than asking legitimate questions.",
                &[
                    "You're lying about what you saw, aren't you?",
                    "No reasonable person would believe your story, would they?",
                ],
                "The question is argumentative - the attorney is arguing with the witness rather than eliciting facts.",
                &[Questioning, Basic],
            ),
            objection(
                9,
                "Non-Responsive",
                "The witness's answer goes beyond the scope of the question or fails to answer it.",
                &[
                    "Q: Where were you on May 1st? A: I'm always careful about remembering important dates, and I have a system for tracking my calendar...",
                    "Q: Did you see the defendant? A: Let me tell you about what happened earlier that day...",
                ],
                "The witness's answer is not responsive to the specific question asked. Direct the witness to answer only what was asked.",
                &[Testimony, Basic],
            ),
            objection(
                10,
                "Beyond the Scope",
                "Questions during cross-examination that go beyond the topics covered in direct examination.",
                &[
                    "Direct exam was about witness location; cross asks about personal relationship with defendant",
                    "Direct covered only the accident; cross asks about events the following day",
                ],
                "The question goes beyond the scope of what was covered in direct examination. Cross-examination should be limited to subjects covered in direct plus credibility.",
                &[Procedure, Intermediate],
            ),
            objection(
                11,
                "Asked and Answered",
                "The question has already been asked and answered by this witness.",
                &[
                    "Repeatedly asking the same question about the witness's location",
                    "Asking for the same timeline information multiple times",
                ],
                "This question has already been asked and answered. Repetitive questioning wastes time and may harass the witness.",
                &[Questioning, Basic],
            ),
            objection(
                12,
                "Lack of Personal Knowledge",
                "The witness is testifying about matters they didn't personally observe or experience.",
                &[
                    "Witness testifying about events that occurred when they weren't present",
                    "Witness describing details they couldn't have seen from their vantage point",
                ],
                "The witness lacks personal knowledge of these matters. Witnesses must testify based on personal observation, not what they heard from others.",
                &[Testimony, Intermediate],
            ),
        ],
        scenarios: vec![
            scenario(
                1,
                "Prosecutor: Mr. Witness, the defendant was angry when he left the party, wasn't he?",
                "Leading Question",
                "This is a leading question because it suggests the answer that the prosecutor wants - that the defendant was angry. A proper question would be 'What was the defendant's demeanor when he left the party?'",
            ),
            scenario(
                2,
                "Defense Attorney: Ms. Witness, what was your third-grade teacher's name?",
                "Relevance",
                "This question asks for information that has no connection to the facts at issue in the case. The witness's third-grade teacher's name is not relevant to any material fact in the current case.",
            ),
            scenario(
                3,
                "Prosecutor: The victim's brother told you that the defendant threatened him, right?",
                "Hearsay",
                "This is hearsay because the question asks the witness to testify about what the victim's brother said (an out-of-court statement) to prove that the defendant made a threat (the truth of the matter asserted).",
            ),
            scenario(
                4,
                "Defense Attorney: Did you see the car and was it speeding and did it have its lights on?",
                "Compound Question",
                "This is a compound question because it asks multiple questions at once: (1) Did you see the car? (2) Was it speeding? (3) Did it have its lights on? These should be asked separately.",
            ),
            scenario(
                5,
                "Prosecutor: What do you think the defendant would have done if the security guard wasn't there?",
                "Speculation",
                "This question asks the witness to speculate about what might have happened in a hypothetical scenario. Witnesses should testify only to facts they directly observed.",
            ),
            scenario(
                6,
                "Defense Attorney: How long have you been hiding evidence from the police?",
                "Assumes Facts Not in Evidence",
                "This question improperly assumes that the witness has been hiding evidence, a fact that has not been established in court.",
            ),
            scenario(
                7,
                "Prosecutor shows witness a document and asks: Can you interpret this DNA analysis for the jury?",
                "Lack of Foundation",
                "The prosecutor has not established that the witness has the expertise or qualifications to interpret DNA analysis. A proper foundation must be laid first.",
            ),
            scenario(
                8,
                "Defense Attorney: You're clearly lying about what you saw that night, aren't you?",
                "Argumentative",
                "This question is argumentative because the attorney is arguing with the witness rather than asking for factual information. It accuses the witness of lying rather than eliciting testimony.",
            ),
            scenario(
                9,
                "Prosecutor: Where were you at 9 PM?\nWitness: Well, I usually go to bed early because I need to wake up for work at 5 AM, and I've always been an early riser. My parents taught me the value of a consistent sleep schedule...",
                "Non-Responsive",
                "The witness's answer goes well beyond the scope of the question, which simply asked for their location at 9 PM. The witness is not directly answering the question asked.",
            ),
            scenario(
                10,
                "Direct examination covered only the witness's observations at the crime scene. On cross, the attorney asks: Have you ever been convicted of a crime?",
                "Beyond the Scope",
                "This question goes beyond the scope of direct examination, which only covered the witness's observations at the crime scene. However, note that questions about credibility (including criminal history) are often allowed even if beyond the scope.",
            ),
            scenario(
                11,
                "Attorney asks for the fifth time: And you're absolutely certain about what time you arrived?",
                "Asked and Answered",
                "This question has already been asked and answered multiple times. Repetitive questioning wastes time and can be used to badger the witness.",
            ),
            scenario(
                12,
                "Prosecutor: What was the defendant thinking when he entered the store?",
                "Lack of Personal Knowledge",
                "The witness cannot have personal knowledge of what another person was thinking. This calls for speculation about the internal thoughts of the defendant.",
            ),
        ],
    }
}

fn objection(
    id: u64,
    name: &str,
    description: &str,
    examples: &[&str],
    response: &str,
    categories: &[Category],
) -> ObjectionDraft {
    ObjectionDraft {
        id: ObjectionId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        response: response.to_string(),
        examples: examples.iter().map(|example| (*example).to_string()).collect(),
        categories: categories.to_vec(),
    }
}

fn scenario(id: u64, prompt: &str, answer: &str, explanation: &str) -> ScenarioDraft {
    ScenarioDraft {
        id: ScenarioId::new(id),
        prompt: prompt.to_string(),
        correct_objection: answer.to_string(),
        explanation: explanation.to_string(),
    }
}
