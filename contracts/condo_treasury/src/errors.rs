use soroban_sdk::contracterror;

//-----------------------------------------------------------------------------
// Treasury Errors
//-----------------------------------------------------------------------------

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TreasuryError {
    /// Raised when an owner-only operation is invoked by someone else
    NotOwner = 1,
    /// Raised when the depositor is not a registered, authorized payer
    UnauthorizedPayer = 2,
    /// Raised when an employee index is outside the registry
    EmployeeNotFound = 3,
    /// Raised when a service index is outside the registry
    ServiceNotFound = 4,
    /// Raised when a disbursement exceeds the tracked balance
    InsufficientBalance = 5,
    /// Raised when the token contract refuses the outbound transfer
    TransferFailed = 6,
    /// Raised for negative amounts
    InvalidAmount = 7,
    AlreadyInitialized = 8,
    NotInitialized = 9,
    /// Raised when updating a payer that was never added
    PayerNotFound = 10,
    /// Raised when a deposit would overflow the tracked balance
    BalanceOverflow = 11,
}

impl TreasuryError {
    /// Human-readable reason, kept byte-for-byte compatible with the
    /// messages existing clients assert on.
    pub const fn message(&self) -> &'static str {
        match self {
            TreasuryError::NotOwner => "Ownable: caller is not the owner",
            TreasuryError::UnauthorizedPayer => "Consorcio: El usuario no puede realizar pagos",
            TreasuryError::EmployeeNotFound => "Consorcio: El empleado no existe",
            TreasuryError::ServiceNotFound => "Consorcio: El servicio no existe",
            TreasuryError::InsufficientBalance => "Consorcio: Fondos insuficientes",
            TreasuryError::TransferFailed => "Consorcio: La transferencia fallo",
            TreasuryError::InvalidAmount => "Consorcio: Monto invalido",
            TreasuryError::AlreadyInitialized => "Consorcio: Ya inicializado",
            TreasuryError::NotInitialized => "Consorcio: No inicializado",
            TreasuryError::PayerNotFound => "Consorcio: El usuario no existe",
            TreasuryError::BalanceOverflow => "Consorcio: Desborde de saldo",
        }
    }
}
