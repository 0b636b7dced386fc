use serde::Deserialize;

/// One step of an animation: which sprite-sheet frame to show and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AnimationFrame {
    pub frame: usize,
    /// Seconds this frame stays on screen.
    pub duration: f32,
}

/// Immutable animation description as found in sprite-sheet files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimationDef {
    pub frames: Vec<AnimationFrame>,
    #[serde(default = "default_looped")]
    pub looped: bool,
}

fn default_looped() -> bool {
    true
}

/// Playback state over an [`AnimationDef`].
///
/// Looped animations wrap to their first frame. One-shot animations stop on
/// their last frame and report [`Animation::is_done`].
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    def: AnimationDef,
    frame_index: usize,
    elapsed_time: f32,
    done: bool,
}

impl Animation {
    pub fn new(def: AnimationDef) -> Self {
        Self {
            def,
            frame_index: 0,
            elapsed_time: 0.0,
            done: false,
        }
    }

    /// Single frame shown forever.
    pub fn still(frame: usize) -> Self {
        Self::new(AnimationDef {
            frames: vec![AnimationFrame {
                frame,
                duration: f32::INFINITY,
            }],
            looped: false,
        })
    }

    pub fn def(&self) -> &AnimationDef {
        &self.def
    }

    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.done = false;
    }

    /// Sheet frame currently displayed.
    pub fn current_frame(&self) -> usize {
        self.def
            .frames
            .get(self.frame_index)
            .map(|f| f.frame)
            .unwrap_or(0)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance playback by `dt` seconds.
    ///
    /// At most one full pass over the frames is made per call, so a
    /// zero-duration frame cannot spin forever.
    pub fn update(&mut self, dt: f32) {
        if self.done || self.def.frames.is_empty() {
            return;
        }
        self.elapsed_time += dt;

        let frame_count = self.def.frames.len();
        let mut steps = 0;
        while steps < frame_count && self.elapsed_time >= self.def.frames[self.frame_index].duration {
            self.elapsed_time -= self.def.frames[self.frame_index].duration.max(0.0);
            steps += 1;
            if self.frame_index + 1 < frame_count {
                self.frame_index += 1;
            } else if self.def.looped {
                self.frame_index = 0;
            } else {
                self.done = true;
                self.elapsed_time = 0.0;
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(durations: &[f32]) -> Vec<AnimationFrame> {
        durations
            .iter()
            .enumerate()
            .map(|(frame, &duration)| AnimationFrame { frame, duration })
            .collect()
    }

    #[test]
    fn looped_animation_wraps() {
        let mut anim = Animation::new(AnimationDef {
            frames: frames(&[0.5, 0.5]),
            looped: true,
        });
        anim.update(0.25);
        assert_eq!(anim.current_frame(), 0);
        anim.update(0.25);
        assert_eq!(anim.current_frame(), 1);
        anim.update(0.5);
        assert_eq!(anim.current_frame(), 0);
        assert!(!anim.is_done());
    }

    #[test]
    fn one_shot_stops_on_last_frame() {
        let mut anim = Animation::new(AnimationDef {
            frames: frames(&[0.5, 0.5, 0.5]),
            looped: false,
        });
        anim.update(1.0);
        assert_eq!(anim.current_frame(), 2);
        assert!(!anim.is_done());
        anim.update(0.5);
        assert_eq!(anim.current_frame(), 2);
        assert!(anim.is_done());

        anim.reset();
        assert_eq!(anim.current_frame(), 0);
        assert!(!anim.is_done());
    }

    #[test]
    fn zero_duration_frames_do_not_hang() {
        let mut anim = Animation::new(AnimationDef {
            frames: frames(&[0.0, 0.0]),
            looped: true,
        });
        anim.update(0.1);
        assert!(anim.current_frame() < 2);
    }

    #[test]
    fn still_never_advances() {
        let mut anim = Animation::still(4);
        anim.update(1000.0);
        assert_eq!(anim.current_frame(), 4);
        assert!(!anim.is_done());
    }

    #[test]
    fn looped_defaults_to_true_in_json() {
        let def: AnimationDef =
            serde_json::from_str(r#"{ "frames": [ { "frame": 1, "duration": 0.2 } ] }"#).unwrap();
        assert!(def.looped);
        assert_eq!(def.frames[0].frame, 1);
    }
}
