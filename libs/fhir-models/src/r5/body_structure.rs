use super::{Attachment, CodeableConcept, CodeableReference, Extension, Identifier, Quantity, Reference};

fhir_resource! {
    /// Record details about an anatomical structure.
    pub struct BodyStructure : DomainResource "BodyStructure" {
        /// Bodystructure identifier
        identifier: Vec<Identifier> => "identifier";
        /// Whether this record is in active use
        active: Option<bool> => "active";
        /// Kind of Structure
        morphology: Option<CodeableConcept> => "morphology";
        /// Included anatomic location(s)
        included_structure: Vec<BodyStructureIncludedStructure> => "includedStructure", "cardinality=1..*";
        /// Excluded anatomic locations(s)
        excluded_structure: Vec<BodyStructureExcludedStructure> => "excludedStructure";
        /// Text description
        description: Option<String> => "description";
        /// Attached images
        image: Vec<Attachment> => "image", "summary=false";
        /// Who this is about
        patient: Option<Reference> => "patient", "required";
    }
}

fhir_element! {
    pub struct BodyStructureIncludedStructure : Backbone "BodyStructureIncludedStructure" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Code that represents the included structure
        structure: Option<CodeableConcept> => "structure", "required";
        /// Code that represents the included structure laterality
        laterality: Option<CodeableConcept> => "laterality";
        /// Landmark relative location
        body_landmark_orientation: Vec<BodyLandmarkOrientation> => "bodyLandmarkOrientation";
        /// Cartesian reference for structure
        spatial_reference: Vec<Reference> => "spatialReference";
        /// Code that represents the included structure qualifier
        qualifier: Vec<CodeableConcept> => "qualifier";
    }
}

fhir_element! {
    pub struct BodyLandmarkOrientation : Backbone "BodyLandmarkOrientation" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Body landmark description
        landmark_description: Vec<CodeableConcept> => "landmarkDescription";
        /// Clockface orientation
        clock_face_position: Vec<CodeableConcept> => "clockFacePosition";
        /// Landmark relative location
        distance_from_landmark: Vec<DistanceFromLandmark> => "distanceFromLandmark";
        /// Relative landmark surface orientation
        surface_orientation: Vec<CodeableConcept> => "surfaceOrientation";
    }
}

fhir_element! {
    pub struct DistanceFromLandmark : Backbone "DistanceFromLandmark" {
        id: Option<String> => "id";
        extension: Vec<Extension> => "extension", "summary=false";
        modifier_extension: Vec<Extension> => "modifierExtension";
        /// Measurement device
        device: Vec<CodeableReference> => "device";
        /// Measured distance from body landmark
        value: Vec<Quantity> => "value";
    }
}

fhir_element! {
    /// Placeholder for an excluded structure; carries no fields and encodes as `{}`.
    pub struct BodyStructureExcludedStructure : Backbone "BodyStructureExcludedStructure" {}
}
