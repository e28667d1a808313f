//! Shared fixture helpers for integration tests.

use dicom::core::{DataElement, PrimitiveValue, VR};
use dicom::dictionary_std::{tags, uids};
use dicom::object::{FileMetaTableBuilder, InMemDicomObject};
use std::path::Path;

/// Write a minimal DICOM record carrying the given fields.
///
/// Field values should have even length so no padding byte lands in the
/// encoded value.
pub fn write_record(path: &Path, study_uid: Option<&str>, series_label: Option<&str>) {
    let mut object = InMemDicomObject::new_empty();

    object.put(DataElement::new(
        tags::SOP_CLASS_UID,
        VR::UI,
        PrimitiveValue::from(uids::SECONDARY_CAPTURE_IMAGE_STORAGE),
    ));
    object.put(DataElement::new(
        tags::SOP_INSTANCE_UID,
        VR::UI,
        PrimitiveValue::from("1.2.3.10"),
    ));

    if let Some(uid) = study_uid {
        object.put(DataElement::new(
            tags::STUDY_INSTANCE_UID,
            VR::UI,
            PrimitiveValue::from(uid),
        ));
    }

    if let Some(label) = series_label {
        object.put(DataElement::new(
            tags::SERIES_DESCRIPTION,
            VR::LO,
            PrimitiveValue::from(label),
        ));
    }

    let object = object
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
                .media_storage_sop_instance_uid("1.2.3.10"),
        )
        .expect("failed to build file meta table");

    object.write_to_file(path).expect("failed to write record");
}

/// Write a file that is not a DICOM record at all.
pub fn write_garbage(path: &Path) {
    std::fs::write(path, b"this is not a DICOM record").expect("failed to write garbage file");
}
