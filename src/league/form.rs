use crate::models::fixture::{Fixture, FixtureOutcome, LastFixture, TeamPreviewStats};

/// Number of entries a form history holds
pub const FORM_LENGTH: usize = 5;

/// Drop the oldest entry, append `latest`, left-pad with `-` to five entries.
pub fn shift_form(existing: &[FixtureOutcome], latest: FixtureOutcome) -> Vec<FixtureOutcome> {
    let keep_from = existing.len().saturating_sub(FORM_LENGTH - 1);
    let mut shifted: Vec<FixtureOutcome> = existing[keep_from..].to_vec();
    shifted.push(latest);

    let mut form = vec![FixtureOutcome::None; FORM_LENGTH - shifted.len()];
    form.extend(shifted);
    form
}

/// Left-pad a history of at most five entries with `-`
pub fn pad_form(form: &[FixtureOutcome]) -> Option<Vec<FixtureOutcome>> {
    if form.len() > FORM_LENGTH {
        return None;
    }
    let mut padded = vec![FixtureOutcome::None; FORM_LENGTH - form.len()];
    padded.extend_from_slice(form);
    Some(padded)
}

/// The finished fixture a team played in, if any
pub fn find_team_fixture<'a>(team_name: &str, fixtures: &'a [Fixture]) -> Option<&'a Fixture> {
    fixtures
        .iter()
        .find(|f| f.is_finished() && f.side_of(team_name).is_some())
}

/// Default-fill a team's preview from the fixture it played the week before.
/// Standing and insights are carried over untouched.
pub fn derive_team_preview(
    team_name: &str,
    previous: &Fixture,
    current: Option<&TeamPreviewStats>,
) -> Option<TeamPreviewStats> {
    let side = previous.side_of(team_name)?;
    let result = previous.final_result.as_ref()?;
    let outcome = FixtureOutcome::from(result.result_for(side));

    let last_fixture = LastFixture {
        opponent: previous.opponent(side).name.clone(),
        home_team_goals: result.home_team_goals,
        away_team_goals: result.away_team_goals,
        was_home: side == crate::models::fixture::Side::Home,
        outcome,
    };

    let base = current.cloned().unwrap_or_default();

    // already propagated for this fixture, don't shift twice
    if base.last_fixture.as_ref() == Some(&last_fixture) && base.form.len() == FORM_LENGTH {
        return Some(base);
    }

    Some(TeamPreviewStats {
        form: shift_form(&base.form, outcome),
        last_fixture: Some(last_fixture),
        ..base
    })
}
