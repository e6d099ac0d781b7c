use crate::{
    endpoints::{PASTE_GET, PASTE_POST},
    Client, Envelope, Params,
};

impl Client {
    /// Fetches paste `id`.
    pub async fn paste(&self, id: &str) -> Envelope {
        self.call(&PASTE_GET, &Params::new().with("id", id)).await
    }

    /// Creates a paste. A missing title is sent as `null`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn run() {
    /// let client = superchief::Client::new("my-key");
    /// let created = client.create_paste(Some("notes"), "hello", true).await;
    /// println!("{}", created.to_value());
    /// # }
    /// ```
    pub async fn create_paste(
        &self,
        title: Option<&str>,
        content: &str,
        private: bool,
    ) -> Envelope {
        let params = Params::new()
            .with("content", content)
            .with("priv", private)
            .with_opt("title", title);
        self.call(&PASTE_POST, &params).await
    }
}
