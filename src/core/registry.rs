/// Named dashboard server operations and the paths they are served under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListProjects,
}

impl Endpoint {
    /// Every registered endpoint, in declaration order.
    pub const ALL: &'static [Endpoint] = &[Endpoint::ListProjects];

    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::ListProjects => "ListProjects",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::ListProjects => "/server/project/list",
        }
    }

    pub fn from_name(name: &str) -> Option<Endpoint> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
