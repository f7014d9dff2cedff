use serde::{Deserialize, Serialize};

/// Identifier wrapper for assessment sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Which aggregate total a category's answers feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Indicators pointing toward an employment relationship ("W").
    Employment,
    /// Indicators pointing toward genuine self-employment ("Z" and "OP").
    Entrepreneurship,
}

/// A named group of indicator questions sharing one aggregation bucket.
///
/// Questions and weights align positionally: `weights[i]` multiplies the
/// answer to `questions[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    name: String,
    bucket: Bucket,
    questions: Vec<String>,
    weights: Vec<f64>,
}

impl Category {
    /// Panics when the definition is malformed. A weights/questions mismatch
    /// is a configuration defect, not a runtime input error, and must fail at
    /// startup rather than degrade the score silently.
    pub fn new(
        name: impl Into<String>,
        bucket: Bucket,
        questions: Vec<String>,
        weights: Vec<f64>,
    ) -> Self {
        let name = name.into();
        assert!(
            !questions.is_empty(),
            "category '{name}' must define at least one question"
        );
        assert_eq!(
            questions.len(),
            weights.len(),
            "category '{name}' weights must align one-to-one with questions"
        );
        assert!(
            weights.iter().all(|weight| *weight > 0.0),
            "category '{name}' weights must be positive"
        );

        Self {
            name,
            bucket,
            questions,
            weights,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Ordered, static questionnaire definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Questionnaire {
    categories: Vec<Category>,
}

impl Questionnaire {
    /// Panics on an empty definition; a questionnaire without questions can
    /// never leave the insufficient-data verdict and is invalid configuration.
    pub fn new(categories: Vec<Category>) -> Self {
        assert!(
            !categories.is_empty(),
            "questionnaire must define at least one category"
        );
        Self { categories }
    }

    /// The built-in VBAR indicator list (draft bill of 27 March 2025):
    /// employer-authority indicators ("W") against self-employment ("Z") and
    /// entrepreneurship ("OP") indicators.
    pub fn standard() -> Self {
        Self::new(vec![
            Category::new(
                "W",
                Bucket::Employment,
                vec![
                    "De werkgevende is bevoegd om aanwijzingen en instructies te geven over de wijze waarop de werkende de werkzaamheden moet uitvoeren en de werkende moet deze ook opvolgen.".to_string(),
                    "De werkgevende heeft de mogelijkheid om de werkzaamheden van de werkende te controleren en is bevoegd om op basis daarvan in te grijpen.".to_string(),
                    "De werkzaamheden worden verricht binnen het organisatorisch kader van de organisatie van de werkgevende.".to_string(),
                    "De werkzaamheden hebben een structureel karakter binnen de organisatie.".to_string(),
                    "Werkzaamheden worden zij-aan-zij verricht met werknemers die soortgelijke werkzaamheden verrichten.".to_string(),
                ],
                vec![2.0, 1.5, 1.5, 1.0, 1.0],
            ),
            Category::new(
                "Z",
                Bucket::Entrepreneurship,
                vec![
                    "De financiële risico’s en resultaten van de werkzaamheden liggen bij de werkende.".to_string(),
                    "Bij het verrichten van de werkzaamheden is de werkende zelf verantwoordelijk voor gereedschap, hulpmiddelen en materialen.".to_string(),
                    "De werkende is in het bezit van een specifieke opleiding, werkervaring, kennis of vaardigheden, die in de organisatie van de werkgevende niet structureel aanwezig is.".to_string(),
                    "De werkende treedt tijdens de werkzaamheden zelfstandig naar buiten.".to_string(),
                    "Er is sprake van een korte duur van de opdracht en/of een beperkt aantal uren per week.".to_string(),
                ],
                vec![2.0, 1.5, 1.5, 1.0, 1.0],
            ),
            Category::new(
                "OP",
                Bucket::Entrepreneurship,
                vec![
                    "De werkende heeft meerdere opdrachtgevers per jaar.".to_string(),
                    "De werkende besteedt tijd en/of geld aan het verwerven van een reputatie en het vinden van nieuwe klanten of opdrachtgevers.".to_string(),
                    "De werkende heeft bedrijfsinvesteringen van enige omvang.".to_string(),
                    "De werkende gedraagt zich administratief als zelfstandig ondernemer: is ingeschreven bij de KVK, is btw-ondernemer en/of heeft recht op de fiscale voordelen van het ondernemerschap.".to_string(),
                ],
                vec![2.0, 1.5, 1.5, 1.0],
            ),
        ])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn total_questions(&self) -> usize {
        self.categories
            .iter()
            .map(Category::question_count)
            .sum()
    }
}

/// A concrete answer to a single question. "Unanswered" is deliberately not a
/// variant: sheets store `Option<Answer>` so an untouched question counts as
/// zero while remaining distinguishable for completion counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    Partial,
    No,
}

impl Answer {
    pub const fn value(self) -> f64 {
        match self {
            Answer::Yes => 1.0,
            Answer::Partial => 0.5,
            Answer::No => 0.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::Partial => "partial",
            Answer::No => "no",
        }
    }
}

/// Raised when an answer targets a (category, question) slot that does not
/// exist in the questionnaire. The only fallible edge of the engine, and it
/// exists solely because HTTP consumers supply untrusted indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no question at category {category}, index {question}")]
pub struct AnswerOutOfRange {
    pub category: usize,
    pub question: usize,
}

/// Immutable snapshot of every answer slot for one questionnaire.
///
/// The sheet is a value: applying an answer yields a new sheet and leaves the
/// previous snapshot untouched, so scoring always reads consistent state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSheet {
    slots: Vec<Vec<Option<Answer>>>,
}

impl AnswerSheet {
    /// A fresh sheet with every question unanswered.
    pub fn for_questionnaire(questionnaire: &Questionnaire) -> Self {
        Self {
            slots: questionnaire
                .categories()
                .iter()
                .map(|category| vec![None; category.question_count()])
                .collect(),
        }
    }

    /// Returns a new sheet with the given slot set. Only the touched category
    /// row is rewritten; there is no operation to clear a slot back to
    /// unanswered.
    pub fn with_answer(
        &self,
        category: usize,
        question: usize,
        answer: Answer,
    ) -> Result<Self, AnswerOutOfRange> {
        let out_of_range = AnswerOutOfRange { category, question };
        let row = self.slots.get(category).ok_or(out_of_range)?;
        if question >= row.len() {
            return Err(out_of_range);
        }

        let mut slots = self.slots.clone();
        slots[category][question] = Some(answer);
        Ok(Self { slots })
    }

    /// The current answer for a slot, or `None` when unanswered or the slot
    /// does not exist.
    pub fn answer(&self, category: usize, question: usize) -> Option<Answer> {
        self.slots.get(category)?.get(question).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.slots
            .iter()
            .map(|row| row.iter().filter(|slot| slot.is_some()).count())
            .sum()
    }

    pub fn total_slots(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}
