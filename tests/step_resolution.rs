//! Integration tests for resolving every scripted step against the
//! reference profile.

use std::time::Duration;

use proptest::prelude::*;

use essentia::adapters::ReferenceExtractor;
use essentia::domain::profile::IdentityProfile;
use essentia::domain::script::{
    resolve_display, steps, Callout, InteractivePrompt, Phase, Readout, Screen, Status, StepSequence,
    SMART_FIELDS, STEP_COUNT,
};
use essentia::domain::session::ScreenPosition;
use essentia::ports::{DocumentSet, ProfileExtractor};

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn reference_profile() -> IdentityProfile {
    ReferenceExtractor::new()
        .with_latency(Duration::ZERO)
        .extract(&DocumentSet::new())
        .await
        .unwrap()
}

fn readout(value: &str, status: Status) -> Callout {
    Callout::Readout(Readout {
        value: value.to_string(),
        status,
    })
}

// =============================================================================
// Resolution table
// =============================================================================

#[tokio::test]
async fn reference_profile_resolves_every_step() {
    let profile = reference_profile().await;

    let expected = [
        readout("DISC", Status::Neutro),
        readout("Executor", Status::Neutro),
        readout("Em Análise", Status::Alerta),
        readout("15", Status::Neutro),
        readout("Adaptado", Status::Neutro),
        readout("Alto", Status::Alerta),
        readout("8", Status::Alerta),
        readout("Autonomia e Independência", Status::Neutro),
        readout("55%", Status::Alerta),
        readout("12", Status::Neutro),
        readout("Equilibrado", Status::Alerta),
        readout("30", Status::Alerta),
        Callout::Interactive(InteractivePrompt::Selection {
            options: profile.disc.limitations.clone(),
        }),
        Callout::Interactive(InteractivePrompt::Smart {
            fields: SMART_FIELDS.iter().map(|f| f.to_string()).collect(),
        }),
        Callout::Interactive(InteractivePrompt::Closing),
    ];

    assert_eq!(steps().len(), STEP_COUNT);
    for (step, expected) in steps().iter().zip(expected.iter()) {
        assert_eq!(
            &resolve_display(step, Some(&profile)),
            expected,
            "step {} ({})",
            step.id,
            step.title
        );
    }
}

#[tokio::test]
async fn reference_profile_keeps_top5_as_prefix() {
    let profile = reference_profile().await;
    let all = profile.strengths.all();
    let top5 = profile.strengths.top5();

    assert_eq!(top5.len(), all.len().min(5));
    assert_eq!(top5, &all[..top5.len()]);
}

#[test]
fn steps_without_profile_show_raw_values_or_prompts() {
    for step in steps() {
        let callout = resolve_display(step, None);
        match callout {
            Callout::Readout(readout) => {
                assert_eq!(readout.value, step.action.value.as_str());
                assert_eq!(readout.status, step.action.status);
            }
            Callout::Interactive(_) => assert!(step.id >= 13),
        }
    }
}

#[test]
fn phases_cover_all_steps_in_order() {
    let numbers: Vec<u8> = Phase::ALL
        .iter()
        .flat_map(|phase| StepSequence::phase_steps(*phase).map(|step| step.id))
        .collect();
    assert_eq!(numbers, (1..=15).collect::<Vec<u8>>());
}

// =============================================================================
// Position laws
// =============================================================================

proptest! {
    #[test]
    fn jump_always_lands_on_a_step(number in any::<i32>()) {
        let position = ScreenPosition::jump_to_step(number);
        let expected = number.clamp(1, 15) as u8;
        prop_assert_eq!(position.screen(), Screen::Step(expected));
    }

    #[test]
    fn any_index_is_clamped_into_the_sequence(index in any::<i32>()) {
        let position = ScreenPosition::from_index(index);
        prop_assert!(position.index() >= StepSequence::INTAKE_SCREEN);
        prop_assert!(position.index() <= StepSequence::COMPLETION_SCREEN);
    }

    #[test]
    fn next_then_prev_returns_inside_the_steps(number in 1i32..15) {
        let position = ScreenPosition::jump_to_step(number);
        prop_assert_eq!(position.next().prev(), position);
    }
}
