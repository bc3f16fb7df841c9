use std::sync::Arc;

use tracing::{debug, error, warn};

use super::{
    Category, ExtrasSlice, PartnershipRepository, RecordsError, SliceRepository, SourceResult,
    SummarySlice, TargetKind, TeamRepository,
};
use crate::domain::{
    PagedResult, PartnershipInnings, RecordQuery, SortKey, TeamExtras, TeamMatchResult,
    TeamTarget, Wicket,
};

/// Query dispatch for one record category.
///
/// Substitutes the category's default ordering for an unknown sort code, forwards the query to
/// the repository operation for the requested slice and caps the returned page at the requested
/// page size. Validation and formatting happen elsewhere.
pub struct CategoryRecords<R: ?Sized> {
    category: Category,
    repository: Arc<R>,
}

impl<R: ?Sized> CategoryRecords<R> {
    pub fn new(category: Category, repository: Arc<R>) -> Self {
        Self {
            category,
            repository,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    fn log_dispatch(&self, slice: &'static str, query: &RecordQuery) {
        debug!(
            target: "cricrecords::service",
            category = self.category.as_str(),
            slice,
            match_type = query.match_type().code(),
            sort = query.sort().name(),
            direction = query.direction().as_str(),
            page = query.window().page(),
            page_size = query.window().size(),
            "dispatching record query"
        );
    }

    fn finish<T>(
        &self,
        slice: &'static str,
        query: &RecordQuery,
        fetched: SourceResult<PagedResult<T>>,
    ) -> Result<PagedResult<T>, RecordsError> {
        let mut page = fetched.map_err(|source| {
            error!(
                target: "cricrecords::service",
                category = self.category.as_str(),
                slice,
                error = %source,
                "record query failed"
            );
            RecordsError::DataAccess(source)
        })?;

        let size = query.window().size() as usize;
        if page.len() > size {
            warn!(
                target: "cricrecords::service",
                category = self.category.as_str(),
                slice,
                returned = page.len(),
                page_size = size,
                "repository returned more rows than requested; truncating"
            );
            page.truncate(size);
        }
        Ok(page)
    }

    fn with_sort(&self, query: &RecordQuery, default: SortKey) -> RecordQuery {
        query.or_default_sort(default)
    }
}

impl<R: SliceRepository + ?Sized> CategoryRecords<R> {
    pub async fn summary(
        &self,
        slice: SummarySlice,
        query: &RecordQuery,
    ) -> Result<PagedResult<R::Summary>, RecordsError> {
        let query = self.with_sort(query, self.category.default_sort());
        self.log_dispatch(slice.as_str(), &query);
        let fetched = self.repository.summary(slice, &query).await;
        self.finish(slice.as_str(), &query, fetched)
    }

    pub async fn overall(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<R::Summary>, RecordsError> {
        self.summary(SummarySlice::Overall, query).await
    }

    pub async fn by_series(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<R::Summary>, RecordsError> {
        self.summary(SummarySlice::BySeries, query).await
    }

    pub async fn by_season(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<R::Summary>, RecordsError> {
        self.summary(SummarySlice::BySeason, query).await
    }

    pub async fn by_year(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<R::Summary>, RecordsError> {
        self.summary(SummarySlice::ByYear, query).await
    }

    pub async fn by_ground(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<R::Summary>, RecordsError> {
        self.summary(SummarySlice::ByGround, query).await
    }

    pub async fn by_host_country(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<R::Summary>, RecordsError> {
        self.summary(SummarySlice::ByHostCountry, query).await
    }

    pub async fn by_opponent(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<R::Summary>, RecordsError> {
        self.summary(SummarySlice::ByOpponent, query).await
    }

    pub async fn innings_by_innings(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<R::Innings>, RecordsError> {
        let query = self.with_sort(query, self.category.default_innings_sort());
        self.log_dispatch("innings-by-innings", &query);
        let fetched = self.repository.innings(&query).await;
        self.finish("innings-by-innings", &query, fetched)
    }

    pub async fn match_totals(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<R::Innings>, RecordsError> {
        let query = self.with_sort(query, self.category.default_innings_sort());
        self.log_dispatch("match-totals", &query);
        let fetched = self.repository.match_totals(&query).await;
        self.finish("match-totals", &query, fetched)
    }
}

impl<R: TeamRepository + ?Sized> CategoryRecords<R> {
    pub async fn match_results(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<TeamMatchResult>, RecordsError> {
        let query = self.with_sort(query, SortKey::MatchStartDateAsOffset);
        self.log_dispatch("match-results", &query);
        let fetched = self.repository.match_results(&query).await;
        self.finish("match-results", &query, fetched)
    }

    pub async fn overall_extras(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<TeamExtras>, RecordsError> {
        self.extras(ExtrasSlice::Overall, "overall-extras", query)
            .await
    }

    pub async fn by_innings_extras(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<TeamExtras>, RecordsError> {
        self.extras(ExtrasSlice::ByInnings, "by-innings-extras", query)
            .await
    }

    pub async fn highest_chased(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<TeamTarget>, RecordsError> {
        self.targets(TargetKind::HighestChased, "highest-chased", query)
            .await
    }

    pub async fn lowest_defended(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<TeamTarget>, RecordsError> {
        self.targets(TargetKind::LowestDefended, "lowest-defended", query)
            .await
    }

    pub async fn lowest_defended_unreduced(
        &self,
        query: &RecordQuery,
    ) -> Result<PagedResult<TeamTarget>, RecordsError> {
        self.targets(
            TargetKind::LowestDefendedUnreduced,
            "lowest-defended-unreduced",
            query,
        )
        .await
    }

    async fn extras(
        &self,
        slice: ExtrasSlice,
        name: &'static str,
        query: &RecordQuery,
    ) -> Result<PagedResult<TeamExtras>, RecordsError> {
        let query = self.with_sort(query, SortKey::TotalExtras);
        self.log_dispatch(name, &query);
        let fetched = self.repository.extras(slice, &query).await;
        self.finish(name, &query, fetched)
    }

    async fn targets(
        &self,
        kind: TargetKind,
        name: &'static str,
        query: &RecordQuery,
    ) -> Result<PagedResult<TeamTarget>, RecordsError> {
        let query = self.with_sort(query, SortKey::Target);
        self.log_dispatch(name, &query);
        let fetched = self.repository.targets(kind, &query).await;
        self.finish(name, &query, fetched)
    }
}

impl<R: PartnershipRepository + ?Sized> CategoryRecords<R> {
    pub async fn innings_by_innings_for_wicket(
        &self,
        query: &RecordQuery,
        wicket: Wicket,
    ) -> Result<PagedResult<PartnershipInnings>, RecordsError> {
        let query = self.with_sort(query, self.category.default_innings_sort());
        self.log_dispatch("innings-by-wicket", &query);
        let fetched = self.repository.innings_for_wicket(&query, wicket).await;
        self.finish("innings-by-wicket", &query, fetched)
    }
}
