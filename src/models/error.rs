use thiserror::Error;

/// Everything that can abort an inventory fetch. All of these are batch-fatal,
/// the pipeline never continues past a failed fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("steamid64 can't be empty")]
    EmptySteamId,

    #[error("csinventoryapi rejected the inventory request (success != 1)")]
    UpstreamRejected,

    #[error("inventory is empty (total_inventory_count is 0)")]
    EmptyInventory,

    #[error("inventory response is missing the {0} array")]
    MalformedResponse(&'static str),

    #[error("HTTP request to csinventoryapi failed. {0}")]
    Transport(#[from] reqwest::Error),
}

/// Why one item got no float data. Item-local, logged and swallowed inside
/// the float stage so a single bad item never takes down the batch.
#[derive(Debug, Error)]
pub enum EnrichmentSkipped {
    #[error("no inspect link")]
    NoInspectLink,

    #[error("float request failed. {0}")]
    RequestFailed(String),

    #[error("unusable iteminfo payload. {0}")]
    BadItemInfo(String),
}
