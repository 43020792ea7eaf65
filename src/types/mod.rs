mod document;
pub use self::document::{
    AddressDocument, CityDocument, Document, DocumentType, MunicipalityDocument, StreetDocument,
    ZipcodeDocument,
};

mod response;
pub use self::response::{ApiError, ErrorResponse, Response, SuccessResponse};
