use crate::{
    endpoint::Endpoint,
    endpoints::{
        BLACKLIST_SERVERS_ADD, BLACKLIST_SERVERS_CHECK, BLACKLIST_SERVERS_LIST,
        BLACKLIST_SERVERS_REMOVE, BLACKLIST_USERS_ADD, BLACKLIST_USERS_CHECK, BLACKLIST_USERS_LIST,
        BLACKLIST_USERS_REMOVE,
    },
    Client, Envelope, Params,
};

/// Which developer blacklist to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blacklist {
    /// Discord users.
    Users,
    /// Discord servers.
    Servers,
}

impl Blacklist {
    fn list(self) -> &'static Endpoint {
        match self {
            Blacklist::Users => &BLACKLIST_USERS_LIST,
            Blacklist::Servers => &BLACKLIST_SERVERS_LIST,
        }
    }

    fn add(self) -> &'static Endpoint {
        match self {
            Blacklist::Users => &BLACKLIST_USERS_ADD,
            Blacklist::Servers => &BLACKLIST_SERVERS_ADD,
        }
    }

    fn remove(self) -> &'static Endpoint {
        match self {
            Blacklist::Users => &BLACKLIST_USERS_REMOVE,
            Blacklist::Servers => &BLACKLIST_SERVERS_REMOVE,
        }
    }

    fn check(self) -> &'static Endpoint {
        match self {
            Blacklist::Users => &BLACKLIST_USERS_CHECK,
            Blacklist::Servers => &BLACKLIST_SERVERS_CHECK,
        }
    }
}

impl Client {
    /// Every entry of `list`.
    pub async fn blacklisted(&self, list: Blacklist) -> Envelope {
        self.call(list.list(), &Params::new()).await
    }

    /// Adds `id` to `list`.
    pub async fn blacklist(&self, list: Blacklist, id: &str, reason: Option<&str>) -> Envelope {
        let params = Params::new().with("id", id).with_opt("reason", reason);
        self.call(list.add(), &params).await
    }

    /// Removes `id` from `list`.
    pub async fn unblacklist(&self, list: Blacklist, id: &str) -> Envelope {
        self.call(list.remove(), &Params::new().with("id", id)).await
    }

    /// Whether `id` is on `list`.
    pub async fn is_blacklisted(&self, list: Blacklist, id: &str) -> Envelope {
        self.call(list.check(), &Params::new().with("id", id)).await
    }
}
