pub mod amount;
pub mod client;
pub mod deposit;

pub use amount::DepositAmount;
pub use amount::ParseDepositAmountError;
pub use client::Client;
pub use client::ClientId;
pub use deposit::CoinSymbol;
pub use deposit::Deposit;
pub use deposit::DepositId;
pub use deposit::DepositOwner;
pub use deposit::DepositStatus;
pub use deposit::OwnerProfile;
