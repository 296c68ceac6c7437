multiversx_sc::imports!();

use crate::events;
use crate::storage;
use crate::tally;
use crate::types::DaoStatus;
use crate::INACTIVITY_PERIOD;

#[multiversx_sc::module]
pub trait SweepModule:
    storage::StorageModule + events::EventsModule + tally::TallyModule
{
    // ========================================================
    // ENDPOINT: sweepInactive
    // Block-boundary hook. Permissionless; a keeper calls it once
    // per block. An indexed DAO with no stored record is skipped
    // with an event. A record that fails to decode aborts the pass.
    // ========================================================

    #[endpoint(sweepInactive)]
    fn sweep_inactive(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let mut dissolved = 0u64;

        for dao_address in self.dao_addresses().iter() {
            let mut dao = match self.load_dao(&dao_address) {
                Some(dao) => dao,
                None => {
                    self.sweep_skipped_event(&dao_address);
                    continue;
                },
            };

            if !dao.is_active() {
                continue;
            }

            self.tally_expired_proposals(&dao_address, now);

            if let Some(expiration_date) = dao.expiration_date {
                if now >= expiration_date {
                    dao.status = DaoStatus::Dissolved;
                    self.store_dao(&dao);
                    self.dao_dissolved_expired_event(&dao_address, expiration_date);
                    dissolved += 1;
                    continue;
                }
            }

            if now.saturating_sub(dao.last_action_date) >= INACTIVITY_PERIOD {
                dao.status = DaoStatus::Dissolved;
                self.store_dao(&dao);
                self.dao_dissolved_inactivity_event(&dao_address, dao.last_action_date);
                dissolved += 1;
            }
        }

        dissolved
    }
}
