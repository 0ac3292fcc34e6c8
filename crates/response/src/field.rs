use core::fmt;

/// Positional field of a WLS response.
///
/// Variants are declared in wire order, so `field as usize` is the position
/// of the field in the `!`-separated response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Ver,
    Status,
    Msg,
    Issue,
    Id,
    Url,
    Principal,
    Auth,
    Sso,
    Life,
    Params,
    Kid,
    Sig,
}

impl Field {
    /// Every field, in wire order.
    pub const ALL: [Self; 13] = [
        Self::Ver,
        Self::Status,
        Self::Msg,
        Self::Issue,
        Self::Id,
        Self::Url,
        Self::Principal,
        Self::Auth,
        Self::Sso,
        Self::Life,
        Self::Params,
        Self::Kid,
        Self::Sig,
    ];

    /// Fields covered by the signature, in signing order.
    ///
    /// `kid` and `sig` are not signed.
    pub const SIGNED: [Self; 11] = [
        Self::Ver,
        Self::Status,
        Self::Msg,
        Self::Issue,
        Self::Id,
        Self::Url,
        Self::Principal,
        Self::Auth,
        Self::Sso,
        Self::Life,
        Self::Params,
    ];

    /// Fields that may never be empty.
    pub const REQUIRED: [Self; 5] = [Self::Ver, Self::Status, Self::Issue, Self::Id, Self::Url];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ver => "ver",
            Self::Status => "status",
            Self::Msg => "msg",
            Self::Issue => "issue",
            Self::Id => "id",
            Self::Url => "url",
            Self::Principal => "principal",
            Self::Auth => "auth",
            Self::Sso => "sso",
            Self::Life => "life",
            Self::Params => "params",
            Self::Kid => "kid",
            Self::Sig => "sig",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
