use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::info;

use super::repository::InviteCodeRepository;
use super::service::InviteCodeService;
use super::{token, translator};
use crate::errors::ServiceError;
use crate::fixtures::{FixtureReport, FixtureSeeder};
use crate::invite::domain::InviteCode;

/// Codes seeded per role.
pub const FIXTURE_COUNTS: [(&str, usize); 4] = [("admin", 10), ("director", 3), ("teacher", 99), ("viewer", 5)];

const VALIDITY: i64 = 8760; // hours

/// Fixture codes: each becomes active within a minute of `now` and stays valid
/// for a year.
pub fn fixture_codes(now: DateTime<Utc>) -> Result<Vec<InviteCode>, ServiceError> {
    let mut rng = rand::thread_rng();
    let mut out = Vec::with_capacity(FIXTURE_COUNTS.iter().map(|(_, n)| n).sum());
    for (role, n) in FIXTURE_COUNTS {
        for _ in 0..n {
            let valid_from = now + Duration::seconds(rng.gen_range(0..60));
            out.push(InviteCode {
                code: token::next_code()?,
                role: role.to_string(),
                valid_from,
                valid_to: valid_from + Duration::hours(VALIDITY),
                is_fixture: true,
                ..InviteCode::default()
            });
        }
    }
    Ok(out)
}

#[async_trait]
impl<R: InviteCodeRepository + ?Sized> FixtureSeeder for InviteCodeService<R> {
    async fn seed_fixtures(&self) -> Result<FixtureReport, ServiceError> {
        let purged = self.repository().purge().await?;
        let codes = fixture_codes(Utc::now())?;
        let mut inserted = 0;
        for code in codes {
            self.repository().insert(translator::new_record(code)).await?;
            inserted += 1;
        }
        info!(purged, inserted, "invite_code_fixtures_seeded");
        Ok(FixtureReport { purged, inserted })
    }
}
