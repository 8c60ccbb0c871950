pub(crate) mod currencies;
pub(crate) mod dashboard;
pub(crate) mod health;
pub(crate) mod insight;
pub(crate) mod locator;
pub(crate) mod markets;
pub(crate) mod rates;
pub(crate) mod selection;
