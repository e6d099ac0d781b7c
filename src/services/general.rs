use crate::{
    endpoints::{
        DBL_POST, DBL_STATS, DOCS, DOG_BREED, EIGHT_BALL, FACTS, INVITES, MEMES, NPM, PHOTOS,
        SPECIAL, TIME, TRANSLATE,
    },
    Client, Envelope, Params,
};

impl Client {
    /// top.gg stats for a bot or user.
    pub async fn dbl_stats(&self, token: &str, id: &str) -> Envelope {
        let params = Params::new().with("token", token).with("id", id);
        self.call(&DBL_STATS, &params).await
    }

    /// Posts server and shard counts to top.gg.
    ///
    /// A `servers` count of zero is reported as missing.
    pub async fn dbl_post(
        &self,
        token: &str,
        id: &str,
        servers: u64,
        shards: Option<u64>,
    ) -> Envelope {
        let params = Params::new()
            .with("token", token)
            .with("id", id)
            .with("servers", servers)
            .with_opt("shards", shards);
        self.call(&DBL_POST, &params).await
    }

    /// A random image from `image` (`cats`, `pugs`, `dogs`, ...).
    pub async fn photo(&self, image: &str) -> Envelope {
        self.call(&PHOTOS, &Params::new().with("image", image)).await
    }

    /// A special image endpoint.
    pub async fn special(&self, kind: &str) -> Envelope {
        self.call(&SPECIAL, &Params::new().with("type", kind)).await
    }

    /// Translates `text` into language `to`.
    pub async fn translate(&self, to: &str, text: &str) -> Envelope {
        let params = Params::new().with("to", to).with("text", text);
        self.call(&TRANSLATE, &params).await
    }

    /// Invite links, `both` kinds by default.
    pub async fn invites(&self, kind: Option<&str>) -> Envelope {
        self.call(&INVITES, &Params::new().with_opt("type", kind)).await
    }

    /// Facts, `random` by default.
    pub async fn facts(&self, kind: Option<&str>) -> Envelope {
        self.call(&FACTS, &Params::new().with_opt("type", kind)).await
    }

    /// A random meme.
    pub async fn meme(&self, clean: bool) -> Envelope {
        self.call(&MEMES, &Params::new().with("clean", clean)).await
    }

    /// Shakes the magic 8-ball.
    pub async fn eight_ball(&self) -> Envelope {
        self.call(&EIGHT_BALL, &Params::new()).await
    }

    /// Dog breed information.
    pub async fn dog_breed(&self, kind: Option<&str>, breed: Option<&str>) -> Envelope {
        let params = Params::new().with_opt("type", kind).with_opt("breed", breed);
        self.call(&DOG_BREED, &params).await
    }

    /// npm package information.
    pub async fn npm(&self, name: &str) -> Envelope {
        self.call(&NPM, &Params::new().with("name", name)).await
    }

    /// Local time of `place`, or every known place when `all` is set.
    pub async fn time(&self, place: Option<&str>, all: bool) -> Envelope {
        let params = Params::new().with("all", all).with_opt("place", place);
        self.call(&TIME, &params).await
    }

    /// Searches the discord.js docs. Project and branch default to `stable`.
    pub async fn docs(
        &self,
        search: &str,
        project: Option<&str>,
        branch: Option<&str>,
    ) -> Envelope {
        let params = Params::new()
            .with("search", search)
            .with_opt("project", project)
            .with_opt("branch", branch);
        self.call(&DOCS, &params).await
    }
}
