//! Message keys shared by every catalog.

/// Product name.
pub const EXTENSION_NAME: &str = "extensionName";
/// Product homepage linked from the signature.
pub const EXTENSION_HOMEPAGE: &str = "extensionHomepage";
/// Singular byte unit name.
pub const BYTE: &str = "byte";
/// Plural byte unit name.
pub const BYTES: &str = "bytes";
/// Byte unit symbol.
pub const BYTE_SHORT: &str = "byteShort";
/// Day unit symbol.
pub const DAY_SHORT: &str = "dayShort";
/// Recipient label.
pub const RECIPIENT: &str = "recipient";
/// Short recipient marker shown next to provisional figures.
pub const RECIPIENT_SHORT: &str = "recipientShort";
/// Suffix appended to plural nouns in the signature.
pub const PLURAL_SUFFIX: &str = "pluralSuffix";
/// Space inserted before high punctuation marks.
pub const PUNCTUATION_SPACE: &str = "punctuationSpace";
/// Header size label.
pub const SIZES_HEADER: &str = "composePopupSizesHeader";
/// Body size label.
pub const SIZES_BODY: &str = "composePopupSizesBody";
/// Attachments size label.
pub const SIZES_ATTACHMENTS: &str = "composePopupSizesAttachments";
/// Total size label.
pub const SIZES_TOTAL: &str = "composePopupSizesTotal";
/// Recipient count label.
pub const SIZES_RECIPIENTS: &str = "composePopupSizesRecipients";
/// Heavy attachment warning.
pub const ATTACHMENT_WARNING: &str = "composePopupSizesAttachmentWarning";
/// Link text of the file-sharing alternative.
pub const ATTACHMENT_WARNING_LINK: &str = "composePopupSizesAttachmentWarningLink";
/// Many-recipient warning.
pub const RECIPIENTS_WARNING: &str = "composePopupSizesRecipientsWarning";
/// CO2 label (contains `<sub>2</sub>`).
pub const EQUIVALENCES_CO2: &str = "equivalencesCo2";
/// Oil label.
pub const EQUIVALENCES_OIL: &str = "equivalencesOil";
/// Car label.
pub const EQUIVALENCES_CAR: &str = "equivalencesCar";
/// Train label.
pub const EQUIVALENCES_TRAIN: &str = "equivalencesTrain";
/// Bulb label.
pub const EQUIVALENCES_BULB: &str = "equivalencesBulb";
/// Breathing label.
pub const EQUIVALENCES_BREATHING: &str = "equivalencesBreathing";
/// Signature template with positional `{n}` placeholders.
pub const COMPOSE_SIGNATURE: &str = "composeSignature";
