//-----------------------------------------------------------------------------
// Events
//-----------------------------------------------------------------------------

use soroban_sdk::{contractevent, Address, Env, String};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasuryInitialized {
    pub owner: Address,
    pub token: Address,
    pub initial_balance: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayerUserAdded {
    #[topic]
    pub payer: Address,
    pub name: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayerAuthorizationChanged {
    #[topic]
    pub payer: Address,
    pub authorized: bool,
}

/// Deposit accepted from a registered payer.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpensesPaid {
    #[topic]
    pub payer: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeAdded {
    #[topic]
    pub index: u32,
    pub employee: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceAdded {
    #[topic]
    pub index: u32,
    pub service: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeePaid {
    #[topic]
    pub index: u32,
    pub employee: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServicePaid {
    #[topic]
    pub index: u32,
    pub service: Address,
    pub amount: i128,
}

/// One-off payout to an address outside the registries.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpecificPaymentMade {
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_treasury_initialized(e: &Env, event: TreasuryInitialized) {
    event.publish(e);
}

pub fn emit_payer_user_added(e: &Env, event: PayerUserAdded) {
    event.publish(e);
}

pub fn emit_payer_authorization_changed(e: &Env, event: PayerAuthorizationChanged) {
    event.publish(e);
}

pub fn emit_expenses_paid(e: &Env, event: ExpensesPaid) {
    event.publish(e);
}

pub fn emit_employee_added(e: &Env, event: EmployeeAdded) {
    event.publish(e);
}

pub fn emit_service_added(e: &Env, event: ServiceAdded) {
    event.publish(e);
}

pub fn emit_employee_paid(e: &Env, event: EmployeePaid) {
    event.publish(e);
}

pub fn emit_service_paid(e: &Env, event: ServicePaid) {
    event.publish(e);
}

pub fn emit_specific_payment_made(e: &Env, event: SpecificPaymentMade) {
    event.publish(e);
}

pub fn emit_ownership_transferred(e: &Env, event: OwnershipTransferred) {
    event.publish(e);
}
