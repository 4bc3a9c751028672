use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::repository::{MenuRepository, PaymentRepository, StatsRepository};
use crate::domain::types::{CategorySales, StoreCounts};
use crate::error::ApiServiceError;

// ── AdminStats ───────────────────────────────────────────────────────────────

/// Summary figures for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdminStats {
    pub users: u64,
    pub menu_items: u64,
    pub cart_items: u64,
    pub revenue: f64,
}

pub struct AdminStatsUseCase<S: StatsRepository> {
    pub stats: S,
}

impl<S: StatsRepository> AdminStatsUseCase<S> {
    pub async fn execute(&self) -> Result<AdminStats, ApiServiceError> {
        let StoreCounts {
            users,
            menu_items,
            cart_items,
        } = self.stats.counts().await?;
        let revenue = self.stats.total_revenue().await?;
        Ok(AdminStats {
            users,
            menu_items,
            cart_items,
            revenue,
        })
    }
}

// ── OrderStats ───────────────────────────────────────────────────────────────

pub struct OrderStatsUseCase<P: PaymentRepository, M: MenuRepository> {
    pub payments: P,
    pub menu: M,
}

impl<P: PaymentRepository, M: MenuRepository> OrderStatsUseCase<P, M> {
    /// Per-category purchase breakdown.
    ///
    /// Fans every payment's purchased-item id list out to one occurrence
    /// per id, resolves the ids against the *current* catalog, and groups
    /// by category. Ids whose item has since been deleted contribute
    /// nothing, and revenue reflects catalog prices at query time, not the
    /// amounts paid historically. Output order across categories is
    /// unspecified.
    pub async fn execute(&self) -> Result<Vec<CategorySales>, ApiServiceError> {
        let payments = self.payments.list().await?;

        // Fan-out: one occurrence per purchased id, duplicates preserved.
        let occurrences: Vec<Uuid> = payments
            .iter()
            .flat_map(|p| p.menu_item_ids.iter().copied())
            .collect();
        if occurrences.is_empty() {
            return Ok(vec![]);
        }

        let mut distinct = occurrences.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let catalog: HashMap<Uuid, _> = self
            .menu
            .find_by_ids(&distinct)
            .await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        let mut groups: HashMap<String, (u64, f64)> = HashMap::new();
        for id in occurrences {
            // Unresolvable ids (item deleted since purchase) drop out here.
            if let Some(item) = catalog.get(&id) {
                let entry = groups.entry(item.category.clone()).or_default();
                entry.0 += 1;
                entry.1 += item.price;
            }
        }

        Ok(groups
            .into_iter()
            .map(|(category, (quantity, revenue))| CategorySales {
                category,
                quantity,
                revenue,
            })
            .collect())
    }
}
