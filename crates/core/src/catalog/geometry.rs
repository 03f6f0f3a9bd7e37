//! Region outlines as SVG path data.
//!
//! All paths live in the `0 0 200 600` view box. The outer silhouette has one set per gender;
//! organ and circulatory outlines are shared.

/// Outer-silhouette outlines for one gender.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BaseOutlines {
    pub head: &'static str,
    pub neck: &'static str,
    pub shoulders: &'static str,
    pub chest: &'static str,
    pub arms: &'static str,
    pub hands: &'static str,
    pub fingers: &'static str,
    pub abdomen: &'static str,
    pub genitals: &'static str,
    pub thighs: &'static str,
    pub knees: &'static str,
    pub calves: &'static str,
    pub ankles: &'static str,
    pub feet: &'static str,
}

/// Organ and circulatory outlines.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InternalOutlines {
    pub brain: &'static str,
    pub heart: &'static str,
    pub lungs: &'static str,
    pub liver: &'static str,
    pub colon: &'static str,
    pub veins: &'static str,
}

pub(crate) const MALE: BaseOutlines = BaseOutlines {
    head: "M 100 20 C 80 20 70 40 70 60 C 70 90 80 100 100 100 C 120 100 130 90 130 60 C 130 40 120 20 100 20",
    neck: "M 85 100 L 85 120 L 115 120 L 115 100",
    shoulders: "M 85 120 L 40 130 L 40 160 L 70 140 L 130 140 L 160 160 L 160 130 L 115 120",
    chest: "M 70 140 L 70 220 C 70 240 130 240 130 220 L 130 140",
    arms: "M 40 160 L 30 300 L 50 300 L 60 170 M 160 160 L 170 300 L 150 300 L 140 170",
    hands: "M 30 300 L 20 330 L 60 330 L 50 300 M 170 300 L 180 330 L 140 330 L 150 300",
    fingers: "M 20 330 L 15 350 L 65 350 L 60 330 M 180 330 L 185 350 L 135 350 L 140 330",
    abdomen: "M 70 220 L 75 300 L 125 300 L 130 220",
    genitals: "M 85 300 L 90 330 L 110 330 L 115 300",
    thighs: "M 75 300 L 70 420 L 90 420 L 95 330 L 105 330 L 110 420 L 130 420 L 125 300",
    knees: "M 70 420 L 68 450 L 92 450 L 90 420 M 110 420 L 108 450 L 132 450 L 130 420",
    calves: "M 68 450 L 70 550 L 90 550 L 92 450 M 108 450 L 110 550 L 130 550 L 132 450",
    ankles: "M 70 550 L 68 565 L 92 565 L 90 550 M 110 550 L 108 565 L 132 565 L 130 550",
    feet: "M 68 565 L 60 590 L 95 590 L 92 565 M 108 565 L 100 590 L 135 590 L 132 565",
};

// Narrower shoulders, curved chest line, wider hips.
pub(crate) const FEMALE: BaseOutlines = BaseOutlines {
    head: "M 100 25 C 85 25 75 40 75 60 C 75 85 85 95 100 95 C 115 95 125 85 125 60 C 125 40 115 25 100 25",
    neck: "M 90 95 L 90 115 L 110 115 L 110 95",
    shoulders: "M 90 115 L 50 125 L 50 150 L 80 140 L 120 140 L 150 150 L 150 125 L 110 115",
    chest: "M 80 140 L 75 210 C 75 230 125 230 125 210 L 120 140",
    arms: "M 50 150 L 45 280 L 60 280 L 70 160 M 150 150 L 155 280 L 140 280 L 130 160",
    hands: "M 45 280 L 40 310 L 65 310 L 60 280 M 155 280 L 160 310 L 135 310 L 140 280",
    fingers: "M 40 310 L 38 330 L 67 330 L 65 310 M 160 310 L 162 330 L 133 330 L 135 310",
    abdomen: "M 75 210 L 70 290 L 130 290 L 125 210",
    genitals: "M 90 290 L 95 310 L 105 310 L 110 290",
    thighs: "M 70 290 L 65 410 L 85 410 L 95 320 L 105 320 L 115 410 L 135 410 L 130 290",
    knees: "M 65 410 L 65 440 L 85 440 L 85 410 M 115 410 L 115 440 L 135 440 L 135 410",
    calves: "M 65 440 L 68 540 L 82 540 L 85 440 M 115 440 L 118 540 L 132 540 L 135 440",
    ankles: "M 68 540 L 68 555 L 82 555 L 82 540 M 118 540 L 118 555 L 132 555 L 132 540",
    feet: "M 68 555 L 65 580 L 85 580 L 82 555 M 118 555 L 115 580 L 135 580 L 132 555",
};

pub(crate) const INTERNAL: InternalOutlines = InternalOutlines {
    brain: "M 90 35 C 80 35 80 55 90 55 C 85 65 115 65 110 55 C 120 55 120 35 110 35 Z",
    heart: "M 105 160 C 110 155 115 155 118 160 C 120 165 115 175 105 180 C 95 175 90 165 92 160 C 95 155 100 155 105 160",
    lungs: "M 85 150 Q 75 150 75 170 Q 75 190 85 195 L 115 195 Q 125 190 125 170 Q 125 150 115 150 Z",
    liver: "M 90 230 Q 80 230 80 250 L 100 250 Q 110 240 110 230 Z",
    colon: "M 85 260 L 80 290 L 120 290 L 115 260 M 90 290 L 95 310 L 105 310 L 110 290",
    veins: "M 45 170 L 35 290 M 155 170 L 165 290 M 75 310 L 75 540 M 125 310 L 125 540",
};
