use crate::{
    endpoints::{FORTNITE, IMDB, MIXER, PALADINS, ROBLOX, ROBLOX_GROUP, TWITCH, YT_SEARCH, YT_STATS},
    Client, Envelope, Params,
};

impl Client {
    /// Mixer user lookup.
    pub async fn mixer(&self, user: &str) -> Envelope {
        self.call(&MIXER, &Params::new().with("user", user)).await
    }

    /// YouTube channel statistics by channel id or name.
    pub async fn yt_stats(&self, token: &str, channel: &str) -> Envelope {
        let params = Params::new().with("token", token).with("user", channel);
        self.call(&YT_STATS, &params).await
    }

    /// Twitch channel lookup.
    pub async fn twitch(&self, token: &str, channel: &str) -> Envelope {
        let params = Params::new().with("token", token).with("user", channel);
        self.call(&TWITCH, &params).await
    }

    /// Roblox account linked to Discord user `id`.
    pub async fn roblox(&self, id: &str) -> Envelope {
        self.call(&ROBLOX, &Params::new().with("id", id)).await
    }

    /// Roblox group `id`.
    pub async fn roblox_group(&self, id: &str) -> Envelope {
        self.call(&ROBLOX_GROUP, &Params::new().with("id", id)).await
    }

    /// Fortnite player stats, on `pc` unless another platform is given.
    pub async fn fortnite(&self, token: &str, user: &str, platform: Option<&str>) -> Envelope {
        let params = Params::new()
            .with("token", token)
            .with("user", user)
            .with_opt("platform", platform);
        self.call(&FORTNITE, &params).await
    }

    /// Paladins player lookup, on `pc` unless another platform is given.
    pub async fn paladins(
        &self,
        dev_id: &str,
        auth: &str,
        user: &str,
        platform: Option<&str>,
    ) -> Envelope {
        let params = Params::new()
            .with("dev_id", dev_id)
            .with("auth", auth)
            .with("user", user)
            .with_opt("platform", platform);
        self.call(&PALADINS, &params).await
    }

    /// IMDb lookup of a show or movie.
    pub async fn imdb(&self, token: &str, show: &str) -> Envelope {
        let params = Params::new().with("token", token).with("show", show);
        self.call(&IMDB, &params).await
    }

    /// YouTube search; `video` results unless another kind is given.
    pub async fn yt_search(&self, token: &str, name: &str, kind: Option<&str>) -> Envelope {
        let params = Params::new()
            .with("token", token)
            .with("name", name)
            .with_opt("type", kind);
        self.call(&YT_SEARCH, &params).await
    }
}
