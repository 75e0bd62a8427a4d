//! Minimal embedded reference rows used when the real tables cannot be read.
//!
//! Each letter class keeps its structural exclusions: B and H only ever pair
//! ANTI with ANTI, A and G only PRO with PRO, the Greek statics only STATIC.

pub const SEED_DIAMOND_CSV: &str = "\
letter,start_pos,end_pos,timing,direction,blue_motion_type,blue_prop_rot_dir,blue_start_loc,blue_end_loc,red_motion_type,red_prop_rot_dir,red_start_loc,red_end_loc
A,alpha1,alpha3,split,same,pro,cw,s,w,pro,cw,n,e
A,alpha3,alpha5,split,same,pro,cw,w,n,pro,cw,e,s
A,alpha1,alpha7,split,same,pro,ccw,s,e,pro,ccw,n,w
B,alpha1,alpha3,split,same,anti,ccw,s,w,anti,ccw,n,e
B,alpha3,alpha5,split,same,anti,ccw,w,n,anti,ccw,e,s
C,alpha1,alpha3,split,same,anti,ccw,s,w,pro,cw,n,e
C,alpha1,alpha3,split,same,pro,cw,s,w,anti,ccw,n,e
G,beta5,beta7,tog,same,pro,cw,s,w,pro,cw,s,w
H,beta5,beta7,tog,same,anti,ccw,s,w,anti,ccw,s,w
α,alpha1,alpha1,none,none,static,no_rot,s,s,static,no_rot,n,n
β,beta5,beta5,none,none,static,no_rot,s,s,static,no_rot,s,s
Γ,gamma11,gamma11,none,none,static,no_rot,s,s,static,no_rot,e,e
";

pub const SEED_BOX_CSV: &str = "\
letter,start_pos,end_pos,timing,direction,blue_motion_type,blue_prop_rot_dir,blue_start_loc,blue_end_loc,red_motion_type,red_prop_rot_dir,red_start_loc,red_end_loc
A,alpha2,alpha4,split,same,pro,cw,sw,nw,pro,cw,ne,se
B,alpha2,alpha4,split,same,anti,ccw,sw,nw,anti,ccw,ne,se
G,beta6,beta8,tog,same,pro,cw,sw,nw,pro,cw,sw,nw
β,beta6,beta6,none,none,static,no_rot,sw,sw,static,no_rot,sw,sw
";
