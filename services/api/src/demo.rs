use std::sync::Arc;

use clap::{Args, ValueEnum};
use vbar_assessment::assessment::{
    Answer, AssessmentService, Bucket, Category, EvaluationConfig, Questionnaire, SessionView,
    DEFAULT_RISK_THRESHOLD,
};
use vbar_assessment::error::AppError;

use crate::infra::InMemorySessionRepository;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Scripted answer set to walk through
    #[arg(long, value_enum, default_value_t = Scenario::Employment)]
    pub(crate) scenario: Scenario,
    /// Risk indicator threshold (defaults to the design value of 2.0)
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum Scenario {
    /// Authority indicators all "yes", independence indicators all "no"
    Employment,
    /// Authority indicators all "no", independence indicators all "yes"
    SelfEmployment,
    /// Strong signals on both sides; lands in the undetermined band
    Mixed,
}

impl Scenario {
    fn answer_for(self, category: &Category) -> Answer {
        match (self, category.bucket(), category.name()) {
            (Scenario::Employment, Bucket::Employment, _) => Answer::Yes,
            (Scenario::Employment, Bucket::Entrepreneurship, _) => Answer::No,
            (Scenario::SelfEmployment, Bucket::Employment, _) => Answer::No,
            (Scenario::SelfEmployment, Bucket::Entrepreneurship, _) => Answer::Yes,
            // Mixed: employer authority and self-employment both score, the
            // entrepreneurship profile ("OP") does not.
            (Scenario::Mixed, _, "OP") => Answer::No,
            (Scenario::Mixed, _, _) => Answer::Yes,
        }
    }
}

pub(crate) fn print_questionnaire() {
    let questionnaire = Questionnaire::standard();
    println!("VBAR indicator questionnaire (draft bill of 27 March 2025)");

    for category in questionnaire.categories() {
        let bucket = match category.bucket() {
            Bucket::Employment => "employment",
            Bucket::Entrepreneurship => "entrepreneurship",
        };
        println!("\nCategory {} ({bucket})", category.name());
        for (question, weight) in category.questions().iter().zip(category.weights()) {
            println!("- [{weight:.1}] {question}");
        }
    }

    println!(
        "\n{} questions total, verdict threshold {:.1}",
        questionnaire.total_questions(),
        DEFAULT_RISK_THRESHOLD
    );
}

/// Walk a scripted answer set through a session category by category, showing
/// how the verdict moves as the completion gate and threshold come into play.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let threshold = args.threshold.unwrap_or(DEFAULT_RISK_THRESHOLD);
    let repository = Arc::new(InMemorySessionRepository::default());
    let service = AssessmentService::new(
        repository,
        Questionnaire::standard(),
        EvaluationConfig {
            risk_threshold: threshold,
        },
    );

    println!("Assessment demo ({:?} scenario, threshold {threshold:.1})", args.scenario);

    let view = service.start().map_err(AppError::from)?;
    let session_id = view.session_id.clone();
    render_standing("Session opened", &view);

    let questionnaire = service.engine().questionnaire().clone();
    for (category_index, category) in questionnaire.categories().iter().enumerate() {
        let answer = args.scenario.answer_for(category);
        let mut view = None;
        for question_index in 0..category.question_count() {
            view = Some(
                service
                    .answer(&session_id, category_index, question_index, answer)
                    .map_err(AppError::from)?,
            );
        }

        if let Some(view) = view {
            let heading = format!(
                "Category {} answered \"{}\"",
                category.name(),
                answer.label()
            );
            render_standing(&heading, &view);
        }
    }

    Ok(())
}

fn render_standing(heading: &str, view: &SessionView) {
    let evaluation = &view.evaluation;
    println!("\n{heading}");
    println!(
        "- answered {}/{} questions",
        evaluation.answered_count, evaluation.total_questions
    );
    println!(
        "- employment score {:.1}, entrepreneurship score {:.1}, RI {:.1}",
        evaluation.totals.employment, evaluation.totals.entrepreneurship, evaluation.risk_indicator
    );
    println!("- verdict: {} ({})", evaluation.verdict.label(), view.advice);
}
