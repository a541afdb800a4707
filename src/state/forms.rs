//! Operation form state.
//!
//! The three operation panels share one shape: string input fields
//! validated for non-emptiness, a loading flag that bars concurrent
//! submission, and the outcome of the last submission (a signature or a
//! display error). Successful submissions clear the inputs; failed ones
//! leave them untouched for correction and resubmission.

// ============================================================================
// Form Kind
// ============================================================================

/// Identifies which operation form a submission result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Create a new token mint.
    Create,
    /// Mint supply into the session's own token account.
    Mint,
    /// Send tokens to a recipient.
    Send,
}

// ============================================================================
// Creator Form
// ============================================================================

/// State of the token creation panel.
///
/// Creation takes no input fields: the mint keypair is generated at submit
/// time.
#[derive(Debug, Default)]
pub struct CreatorForm {
    /// Whether a submission is in flight.
    pub loading: bool,
    /// Display error of the last failed submission.
    pub error: Option<String>,
    /// Mint address of the last created token (full base-58).
    pub mint_address: Option<String>,
    /// Signature of the last successful creation.
    pub signature: Option<String>,
}

impl CreatorForm {
    /// Marks a submission as started.
    pub fn begin_submit(&mut self) {
        self.loading = true;
        self.error = None;
    }
}

// ============================================================================
// Minter Form
// ============================================================================

/// Input fields of the minter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinterField {
    /// The mint address to issue supply for.
    #[default]
    MintAddress,
    /// The amount of whole tokens to mint.
    Amount,
}

impl MinterField {
    /// Cycles to the next field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::MintAddress => Self::Amount,
            Self::Amount => Self::MintAddress,
        }
    }

    /// Cycles to the previous field.
    #[must_use]
    pub const fn prev(self) -> Self {
        // Two fields: previous and next coincide.
        self.next()
    }
}

/// State of the mint panel.
#[derive(Debug, Default)]
pub struct MinterForm {
    /// Mint address input.
    pub mint_address: String,
    /// Amount input, in whole tokens.
    pub amount: String,
    /// Which field currently receives typed input.
    pub field: MinterField,
    /// Whether a submission is in flight.
    pub loading: bool,
    /// Display error of the last failed submission or validation.
    pub error: Option<String>,
    /// Signature of the last successful mint.
    pub signature: Option<String>,
}

impl MinterForm {
    /// Checks that every required field is filled.
    ///
    /// # Errors
    ///
    /// Returns the display message for the validation failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.mint_address.trim().is_empty() || self.amount.trim().is_empty() {
            return Err("Please provide all fields.".to_string());
        }
        Ok(())
    }

    /// Appends a character to the focused field.
    pub fn input_char(&mut self, c: char) {
        match self.field {
            MinterField::MintAddress => self.mint_address.push(c),
            MinterField::Amount => self.amount.push(c),
        }
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.field {
            MinterField::MintAddress => {
                self.mint_address.pop();
            }
            MinterField::Amount => {
                self.amount.pop();
            }
        }
    }

    /// Marks a submission as started.
    pub fn begin_submit(&mut self) {
        self.loading = true;
        self.error = None;
        self.signature = None;
    }

    /// Clears the inputs after a successful submission.
    pub fn clear_inputs(&mut self) {
        self.mint_address.clear();
        self.amount.clear();
        self.field = MinterField::default();
    }
}

// ============================================================================
// Sender Form
// ============================================================================

/// Input fields of the sender panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SenderField {
    /// The mint address of the token to send.
    #[default]
    MintAddress,
    /// The recipient wallet address.
    Recipient,
    /// The amount of whole tokens to send.
    Amount,
}

impl SenderField {
    /// Cycles to the next field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::MintAddress => Self::Recipient,
            Self::Recipient => Self::Amount,
            Self::Amount => Self::MintAddress,
        }
    }

    /// Cycles to the previous field.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::MintAddress => Self::Amount,
            Self::Recipient => Self::MintAddress,
            Self::Amount => Self::Recipient,
        }
    }
}

/// State of the send panel.
#[derive(Debug, Default)]
pub struct SenderForm {
    /// Mint address input.
    pub mint_address: String,
    /// Recipient address input.
    pub recipient: String,
    /// Amount input, in whole tokens.
    pub amount: String,
    /// Which field currently receives typed input.
    pub field: SenderField,
    /// Whether a submission is in flight.
    pub loading: bool,
    /// Display error of the last failed submission or validation.
    pub error: Option<String>,
    /// Signature of the last successful transfer.
    pub signature: Option<String>,
}

impl SenderForm {
    /// Checks that every required field is filled.
    ///
    /// # Errors
    ///
    /// Returns the display message for the validation failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.mint_address.trim().is_empty()
            || self.recipient.trim().is_empty()
            || self.amount.trim().is_empty()
        {
            return Err("Please provide all fields.".to_string());
        }
        Ok(())
    }

    /// Appends a character to the focused field.
    pub fn input_char(&mut self, c: char) {
        match self.field {
            SenderField::MintAddress => self.mint_address.push(c),
            SenderField::Recipient => self.recipient.push(c),
            SenderField::Amount => self.amount.push(c),
        }
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.field {
            SenderField::MintAddress => {
                self.mint_address.pop();
            }
            SenderField::Recipient => {
                self.recipient.pop();
            }
            SenderField::Amount => {
                self.amount.pop();
            }
        }
    }

    /// Marks a submission as started.
    pub fn begin_submit(&mut self) {
        self.loading = true;
        self.error = None;
        self.signature = None;
    }

    /// Clears the inputs after a successful submission.
    pub fn clear_inputs(&mut self) {
        self.mint_address.clear();
        self.recipient.clear();
        self.amount.clear();
        self.field = SenderField::default();
    }
}

// ============================================================================
// Forms State
// ============================================================================

/// The three operation forms.
#[derive(Debug, Default)]
pub struct FormsState {
    pub creator: CreatorForm,
    pub minter: MinterForm,
    pub sender: SenderForm,
}

// ============================================================================
// Tests
// ============================================================================
