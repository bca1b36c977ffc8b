//! Query-string parameters shared by the launch-level endpoints.

use launchlog_core::query::{LaunchFilter, Page};
use serde::Deserialize;

/// `?since=&until=&agency=&state=&lv_type=&site=&limit=&offset=`
///
/// Every field is optional. Endpoints that do not paginate ignore `limit`
/// and `offset`.
#[derive(Debug, Default, Deserialize)]
pub struct LaunchParams {
  pub since:   Option<String>,
  pub until:   Option<String>,
  pub agency:  Option<String>,
  pub state:   Option<String>,
  pub lv_type: Option<String>,
  pub site:    Option<String>,
  pub limit:   Option<i64>,
  pub offset:  Option<i64>,
}

impl LaunchParams {
  pub fn filter(&self) -> LaunchFilter {
    LaunchFilter::from_params(
      self.since.as_deref(),
      self.until.as_deref(),
      self.agency.as_deref(),
      self.state.as_deref(),
      self.lv_type.as_deref(),
      self.site.as_deref(),
    )
  }

  pub fn page(&self) -> Page { Page::new(self.limit, self.offset) }
}
