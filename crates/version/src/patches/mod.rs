//! Upstream change-sets included in this build.

/// Patch numbers included in this build, newest first.
///
/// Numbers absent from the list were either not applicable or are still
/// pending.
#[rustfmt::skip]
pub const INCLUDED_PATCHES: &[u32] = &[
	944, 916, 898, 858, 849, 836, 826, 813, 809, 803, 802, 799, 795, 793, 791, 790, 789, 787, 786, 785, 784, 781,
	776, 775, 774, 773, 736, 723, 719, 713, 712, 711, 710, 707, 706, 702, 699, 696, 695, 690, 686, 682, 675, 673,
	671, 670, 668, 667, 665, 660, 659, 658, 655, 653, 651, 649, 646, 645, 640, 637, 636, 635, 633, 631, 630, 629,
	623, 617, 615, 612, 609, 608, 606, 605, 604, 602, 601, 600, 599, 598, 597, 595, 594, 593, 590, 588, 587, 585,
	582, 580, 579, 578, 577, 576, 575, 574, 572, 568, 567, 566, 565, 563, 562, 561, 559, 554, 553, 552, 551, 550,
	549, 547, 546, 545, 543, 542, 541, 539, 538, 537, 536, 535, 533, 532, 531, 530, 529, 528, 527, 526, 525, 524,
	521, 520, 519, 518, 517, 516, 515, 514, 513, 508, 503, 502, 500, 499, 497, 494, 493, 492, 491, 490, 489, 488,
	487, 486, 485, 483, 478, 477, 474, 473, 472, 470, 468, 467, 466, 463, 462, 458, 457, 456, 455, 454, 452, 450,
	449, 447, 446, 445, 444, 442, 441, 440, 439, 438, 437, 436, 435, 434, 433, 427, 425, 423, 422, 421, 419, 418,
	417, 416, 415, 414, 411, 410, 408, 407, 406, 405, 397, 396, 395, 392, 391, 390, 389, 388, 387, 386, 383, 382,
	381, 379, 378, 377, 376, 375, 374, 373, 372, 371, 370, 369, 368, 367, 365, 364, 362, 361, 360, 359, 358, 357,
	355, 353, 352, 351, 350, 349, 348, 347, 346, 345, 344, 343, 341, 339, 338, 337, 336, 335, 334, 331, 330, 329,
	328, 327, 325, 324, 323, 320, 318, 317, 315, 314, 313, 312, 311, 310, 309, 308, 306, 305, 303, 302, 301, 298,
	297, 296, 295, 294, 293, 292, 291, 290, 289, 288, 286, 285, 284, 282, 281, 280, 279, 278, 277, 276, 275, 274,
	272, 269, 268, 267, 266, 265, 264, 262, 261, 260, 256, 253, 251, 249, 248, 247, 245, 243, 242, 241, 240, 239,
	237, 236, 235, 234, 233, 232, 231, 230, 229, 226, 221, 220, 219, 218, 215, 213, 211, 210, 209, 207, 205, 204,
	203, 201, 199, 193, 192, 191, 187, 186, 184, 181, 178, 173, 172, 171, 170, 169, 167, 166, 165, 160, 159, 158,
	157, 156, 155, 154, 153, 152, 151, 150, 149, 148, 147, 146, 145, 144, 143, 142, 141, 140, 139, 138, 137, 136,
	135, 134, 133, 132, 131, 130, 129, 128, 127, 126, 125, 124, 123, 122, 121, 120, 119, 118, 117, 116, 115, 114,
	113, 112, 111, 110, 109, 108, 107, 106, 105, 104, 103, 102, 101, 100, 99, 98, 97, 96, 95, 94, 93, 92, 91, 90, 89,
	88, 87, 86, 85, 84, 83, 82, 81, 80, 79, 78, 77, 76, 75, 74, 73, 72, 71, 70, 69, 68, 67, 66, 65, 64, 63, 62, 61, 60, 59,
	58, 57, 56, 55, 54, 53, 52, 51, 50, 49, 48, 47, 46, 45, 44, 43, 42, 41, 40, 39, 38, 37, 36, 35, 34, 33, 32, 31, 30, 29,
	28, 27, 26, 25, 24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1,
];

/// Returns whether patch `n` has been included.
pub fn has_patch(n: u32) -> bool {
	INCLUDED_PATCHES.contains(&n)
}
