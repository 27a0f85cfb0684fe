use std::collections::HashMap;

use crate::shared::face_box::FaceBox;

/// All faces found on one source image, in the order they were recorded.
///
/// `cords` and `face_ids` are parallel; the position of a face decides its
/// box color and pairs the drawn region with its id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageGroup {
    cords: Vec<FaceBox>,
    face_ids: Vec<String>,
    has_multiple_faces: bool,
}

impl ImageGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cords: FaceBox, face_id: impl Into<String>) {
        self.cords.push(cords);
        self.face_ids.push(face_id.into());
        if self.cords.len() > 1 {
            self.has_multiple_faces = true;
        }
    }

    pub fn cords(&self) -> &[FaceBox] {
        &self.cords
    }

    pub fn face_ids(&self) -> &[String] {
        &self.face_ids
    }

    pub fn has_multiple_faces(&self) -> bool {
        self.has_multiple_faces
    }

    pub fn len(&self) -> usize {
        self.cords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cords.is_empty()
    }

    /// `(face_id, cords)` pairs in recorded order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FaceBox)> {
        self.face_ids
            .iter()
            .map(String::as_str)
            .zip(self.cords.iter())
    }

    /// Face ids one per line, ready to paste elsewhere.
    pub fn face_ids_text(&self) -> String {
        self.face_ids.join("\n")
    }
}

/// Image-keyed index of [`ImageGroup`]s.
///
/// Iterates in order of first appearance of each file name, which keeps
/// render output and any per-image UI keys stable across runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageIndex {
    entries: Vec<(String, ImageGroup)>,
    positions: HashMap<String, usize>,
}

impl ImageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a face to the group of `file_name`, creating it on first use.
    pub fn insert_face(&mut self, file_name: &str, cords: FaceBox, face_id: impl Into<String>) {
        let position = match self.positions.get(file_name) {
            Some(&position) => position,
            None => {
                self.entries.push((file_name.to_string(), ImageGroup::new()));
                let position = self.entries.len() - 1;
                self.positions.insert(file_name.to_string(), position);
                position
            }
        };
        self.entries[position].1.push(cords, face_id);
    }

    pub fn get(&self, file_name: &str) -> Option<&ImageGroup> {
        self.positions
            .get(file_name)
            .map(|&position| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImageGroup)> {
        self.entries
            .iter()
            .map(|(name, group)| (name.as_str(), group))
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of images showing more than one face.
    pub fn multi_face_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, group)| group.has_multiple_faces())
            .count()
    }

    /// Copy of the index restricted to images with several faces.
    pub fn only_multi_face(&self) -> ImageIndex {
        let mut filtered = ImageIndex::new();
        for (name, group) in self.iter().filter(|(_, g)| g.has_multiple_faces()) {
            filtered.positions.insert(name.to_string(), filtered.entries.len());
            filtered.entries.push((name.to_string(), group.clone()));
        }
        filtered
    }
}
