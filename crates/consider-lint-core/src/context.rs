//! Naming contexts attached to every checked string.

use serde::{Deserialize, Serialize};

/// The kind of named entity a checked string was taken from.
///
/// The display text is the subject of the diagnostic message, as in
/// "Type name contains 'abcd', ...".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingContext {
    /// Base name of the source file.
    FileName,
    /// Name of the package or module clause.
    PackageName,
    /// Text of a comment group.
    Comment,
    /// Local alias given to an imported package.
    PackageAlias,
    /// Name bound by a constant or variable declaration.
    ValueName,
    /// Name of a declared type.
    TypeName,
    /// Field name of a struct type.
    MemberName,
    /// Name of a function parameter.
    ParameterName,
    /// Name of a named function result.
    ResultName,
    /// Method name of an interface type.
    MethodName,
    /// Name of a declared function or method.
    FunctionName,
    /// Name of a method receiver.
    FunctionReceiver,
    /// Statement label.
    Label,
    /// Identifier bound in a statement.
    Identifier,
    /// Name of a generic type parameter.
    TypeParameterName,
}

impl NamingContext {
    /// Returns the human-readable label used in messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FileName => "File name",
            Self::PackageName => "Package name",
            Self::Comment => "Comment",
            Self::PackageAlias => "Package alias",
            Self::ValueName => "Value name",
            Self::TypeName => "Type name",
            Self::MemberName => "Member name",
            Self::ParameterName => "Parameter name",
            Self::ResultName => "Result name",
            Self::MethodName => "Method name",
            Self::FunctionName => "Function name",
            Self::FunctionReceiver => "Function receiver",
            Self::Label => "Label",
            Self::Identifier => "Identifier",
            Self::TypeParameterName => "Type parameter name",
        }
    }
}

impl std::fmt::Display for NamingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
