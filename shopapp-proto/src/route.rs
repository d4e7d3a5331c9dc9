use crate::API_PREFIX;

pub enum ApiRoute {
    Categories,
    Category,
    Products,
    Product,
}

impl ApiRoute {
    /// Router pattern, `:id` marks the path parameter.
    pub fn path(&self) -> String {
        format!("{}{}", API_PREFIX, self._path())
    }

    fn _path(&self) -> &'static str {
        match self {
            ApiRoute::Categories => "/categories",
            ApiRoute::Category => "/categories/:id",
            ApiRoute::Products => "/products",
            ApiRoute::Product => "/products/:id",
        }
    }

    pub fn with_id(&self, id: impl ToString) -> String {
        self.path().replace(":id", &id.to_string())
    }

    pub fn target_raw(&self, host: impl AsRef<str>, port: u16, https: bool) -> String {
        let protocol = if https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, host.as_ref(), port, self.path())
    }
}
