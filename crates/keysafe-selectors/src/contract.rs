//! Token contract resolution through an injected chain client.

use keysafe_model::Address;

/// Human-readable ABI of the standard token interface.
pub const HUMAN_STANDARD_TOKEN_ABI: &[&str] = &[
    "function name() view returns (string)",
    "function symbol() view returns (string)",
    "function decimals() view returns (uint8)",
    "function version() view returns (string)",
    "function totalSupply() view returns (uint256)",
    "function balanceOf(address owner) view returns (uint256)",
    "function allowance(address owner, address spender) view returns (uint256)",
    "function transfer(address to, uint256 value) returns (bool)",
    "function transferFrom(address from, address to, uint256 value) returns (bool)",
    "function approve(address spender, uint256 value) returns (bool)",
    "function approveAndCall(address spender, uint256 value, bytes extraData) returns (bool)",
    "event Transfer(address indexed from, address indexed to, uint256 value)",
    "event Approval(address indexed owner, address indexed spender, uint256 value)",
];

/// Binds an ABI to a deployed address, yielding a callable handle.
///
/// Implemented by whatever chain client the host application owns.
pub trait ContractResolver {
    type Handle;

    fn resolve_contract(&self, abi: &[&str], address: &Address) -> Option<Self::Handle>;
}

impl<R: ContractResolver + ?Sized> ContractResolver for &R {
    type Handle = R::Handle;

    fn resolve_contract(&self, abi: &[&str], address: &Address) -> Option<Self::Handle> {
        (**self).resolve_contract(abi, address)
    }
}
